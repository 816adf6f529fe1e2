//! Box sizing and row emission.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::theme::Theme;

use super::fields::FieldSet;
use super::line::{content_lines, ContentLine};

/// Smallest content width a card is ever drawn with.
pub const MIN_CONTENT_WIDTH: usize = 30;

/// Box width minus content width: one padding space plus one spare column on
/// each side.
pub const BOX_MARGIN: usize = 4;

/// Columns between the two vertical borders of a content row that are not
/// content or padding (the leading and trailing space).
const ROW_GUTTER: usize = 2;

/// A rendered card: rows of identical visible width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    /// Visible width of every row (`box_width + 2`)
    width: usize,
    rows: Vec<String>,
}

impl RenderedCard {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Visible width shared by every row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Horizontal glyphs between the corners of the top and bottom rules.
    pub fn box_width(&self) -> usize {
        self.width - 2
    }

    /// Width available for the widest content line.
    pub fn content_width(&self) -> usize {
        self.box_width() - BOX_MARGIN
    }
}

impl fmt::Display for RenderedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows.join("\n"))
    }
}

/// Content width that fits every line, never below [`MIN_CONTENT_WIDTH`].
pub fn content_width(lines: &[ContentLine]) -> usize {
    lines
        .iter()
        .map(ContentLine::visible_len)
        .fold(MIN_CONTENT_WIDTH, usize::max)
}

/// Render a card from its fields.
pub fn render(fields: &FieldSet, theme: &Theme) -> RenderedCard {
    render_lines(&content_lines(fields), theme)
}

/// Render many cards in parallel; output order matches input order.
pub fn render_all(cards: &[FieldSet], theme: &Theme) -> Vec<RenderedCard> {
    cards.par_iter().map(|fields| render(fields, theme)).collect()
}

/// Frame already-assembled content lines.
///
/// Every row measures `box_width + 2` visible columns: the rules are a corner,
/// `box_width` horizontals and a corner; content rows are a border, a space,
/// the content padded to `box_width - 2`, a space and a border.
pub fn render_lines(lines: &[ContentLine], theme: &Theme) -> RenderedCard {
    let box_width = content_width(lines) + BOX_MARGIN;
    let border = &theme.border;
    let vertical = theme.accent_text(&border.vertical.to_string());

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(theme.accent_text(&border.top(box_width)));

    for line in lines {
        let padding = box_width - line.visible_len() - ROW_GUTTER;
        rows.push(format!(
            "{vertical} {content}{pad} {vertical}",
            content = line.styled(theme),
            pad = " ".repeat(padding),
        ));
    }

    rows.push(theme.accent_text(&border.bottom(box_width)));

    debug!(
        lines = lines.len(),
        box_width,
        style = theme.style.name(),
        color = theme.color.name(),
        "Rendered card"
    );

    RenderedCard {
        width: box_width + 2,
        rows,
    }
}
