//! Content lines: one logical card row before borders and padding.

use crate::theme::Theme;
use crate::width::visible_width;

use super::fields::FieldSet;

/// How a line's text is styled inside the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Plain,
    /// Bold in the accent color (the name)
    Strong,
    /// Dimmed (the tagline)
    Muted,
}

/// One row of card content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentLine {
    pub label: Option<&'static str>,
    pub text: String,
    pub emphasis: Emphasis,
}

impl ContentLine {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            label: None,
            text: printable(text.into()),
            emphasis,
        }
    }

    pub fn labeled(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label: Some(label),
            text: printable(text.into()),
            emphasis: Emphasis::Plain,
        }
    }

    /// Blank separator line.
    pub fn spacer() -> Self {
        Self::default()
    }

    pub fn is_spacer(&self) -> bool {
        self.label.is_none() && self.text.is_empty()
    }

    /// Columns the line's content occupies: label, one space, then text.
    pub fn visible_len(&self) -> usize {
        let label = self.label.map_or(0, |label| visible_width(label) + 1);
        label + visible_width(&self.text)
    }

    /// Content with the theme's emphasis applied, no padding.
    pub fn styled(&self, theme: &Theme) -> String {
        if self.is_spacer() {
            return String::new();
        }

        let text = match self.emphasis {
            Emphasis::Plain => self.text.clone(),
            Emphasis::Strong => theme.strong_text(&self.text),
            Emphasis::Muted => theme.muted_text(&self.text),
        };

        match self.label {
            Some(label) => format!("{} {}", label, text),
            None => text,
        }
    }
}

/// Build the card's content lines in display order.
///
/// Name, tagline, a spacer when either of those is present, then one line per
/// contact field.
pub fn content_lines(fields: &FieldSet) -> Vec<ContentLine> {
    let mut lines = Vec::new();

    if let Some(name) = fields.name_value() {
        lines.push(ContentLine::new(name, Emphasis::Strong));
    }
    if let Some(tagline) = fields.tagline_value() {
        lines.push(ContentLine::new(tagline, Emphasis::Muted));
    }
    if !lines.is_empty() {
        lines.push(ContentLine::spacer());
    }

    lines.extend(
        fields
            .contacts()
            .map(|(kind, value)| ContentLine::labeled(kind.icon(), value)),
    );

    lines
}

/// Replace control characters with a space, keeping ESC so styling
/// sequences in the value still pass through.
fn printable(text: String) -> String {
    if !text.chars().any(is_layout_control) {
        return text;
    }
    text.chars()
        .map(|c| if is_layout_control(c) { ' ' } else { c })
        .collect()
}

fn is_layout_control(c: char) -> bool {
    c.is_control() && c != '\x1b'
}
