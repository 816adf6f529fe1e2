//! ANSI escape codes and text wrappers for card output.

use super::Theme;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Bold (SGR 1)
pub const ANSI_BOLD: &str = "\x1b[1m";

/// Dim/faint (SGR 2)
pub const ANSI_DIM: &str = "\x1b[2m";

/// Foreground color codes for the accent palette.
pub mod fg {
    /// Cyan (ANSI 36)
    pub const CYAN: &str = "\x1b[36m";
    /// Green (ANSI 32)
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow (ANSI 33)
    pub const YELLOW: &str = "\x1b[33m";
    /// Magenta (ANSI 35)
    pub const MAGENTA: &str = "\x1b[35m";
    /// Red (ANSI 31)
    pub const RED: &str = "\x1b[31m";
    /// White (ANSI 37)
    pub const WHITE: &str = "\x1b[37m";
}

impl Theme {
    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        wrap(&[self.accent], text, self.reset)
    }

    /// Format text bold in the accent color (used for the card name).
    pub fn strong_text(&self, text: &str) -> String {
        wrap(&[self.bold, self.accent], text, self.reset)
    }

    /// Format text dimmed (used for the tagline).
    pub fn muted_text(&self, text: &str) -> String {
        wrap(&[self.dim], text, self.reset)
    }
}

/// Surround `text` with the given opening codes and a closing code.
///
/// Empty codes contribute nothing, so plain themes return the bare text.
fn wrap(open: &[&str], text: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for code in open {
        out.push_str(code);
    }
    out.push_str(text);
    out.push_str(close);
    out
}
