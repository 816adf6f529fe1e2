//! Visible width measurement for styled terminal text.
//!
//! Every place that pads or sizes card content goes through [`visible_width`].
//! Styled text is first run through a `vte` parser so that CSI, OSC and other
//! escape sequences are dropped, then the remaining printable text is measured
//! with `unicode-width`.
//!
//! Width policy: a glyph occupies the column count `unicode-width` reports for
//! it (CJK ideographs and emoji with default emoji presentation are 2, combining
//! marks are 0, everything else printable is 1). Control characters count 0.
//! The contact label icons used by the card renderer all measure 2.

use tracing::trace;
use unicode_width::UnicodeWidthStr;
use vte::{Params, Parser, Perform};

/// Collects the printable characters the parser emits and nothing else.
#[derive(Default)]
struct PrintableText {
    text: String,
}

impl Perform for PrintableText {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn execute(&mut self, _byte: u8) {}

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        trace!(
            action = %action,
            params = params.len(),
            intermediates = ?intermediates,
            "Skipped CSI sequence"
        );
    }
}

/// Remove terminal escape sequences and control characters from `s`.
pub fn strip_ansi(s: &str) -> String {
    if !s.contains('\x1b') && !s.chars().any(char::is_control) {
        return s.to_string();
    }

    let mut parser = Parser::new();
    let mut printable = PrintableText::default();
    parser.advance(&mut printable, s.as_bytes());
    printable.text
}

/// Number of terminal columns `s` occupies once printed.
///
/// Escape sequences are zero-width.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}
