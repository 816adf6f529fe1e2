//! Configuration management for claw-card
//!
//! A [`Profile`] is layered from the default config file, an explicit
//! `--config` file and command-line flags, later sources winning.

mod error;
mod io;
mod types;

pub use error::{ConfigError, ProfileError};
pub use io::{config_dir, config_path, load_default, load_file};
pub use types::{Profile, ProfileJson};
