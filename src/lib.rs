//! claw-card library
//!
//! Renders terminal business cards: a box-drawn panel with a name, a tagline
//! and contact links, aligned by visible width so colors and emoji icons never
//! break the frame.

pub mod card;
pub mod cli;
pub mod config;
pub mod theme;
pub mod width;

pub use card::{render, render_all, FieldSet, RenderedCard};
pub use config::Profile;
pub use theme::{resolve, Theme};
pub use width::visible_width;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
