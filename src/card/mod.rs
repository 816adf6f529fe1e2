//! Card rendering engine.
//!
//! Turns a [`FieldSet`] and a [`Theme`](crate::theme::Theme) into a
//! [`RenderedCard`] whose rows all share the same visible width, no matter how
//! many escape sequences or wide glyphs they carry.

mod fields;
mod layout;
mod line;

pub use fields::{Contact, FieldSet};
pub use layout::{
    content_width, render, render_all, render_lines, RenderedCard, BOX_MARGIN, MIN_CONTENT_WIDTH,
};
pub use line::{content_lines, ContentLine, Emphasis};
