//! Border glyph sets for the card frame.

/// Border character set for drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Invisible frame: every glyph is a space, so only padding remains.
pub const BORDER_MINIMAL: BorderSet = BorderSet {
    top_left: ' ',
    top_right: ' ',
    bottom_left: ' ',
    bottom_right: ' ',
    horizontal: ' ',
    vertical: ' ',
};

/// Standard single-line borders
pub const BORDER_BOX: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Double-line borders
pub const BORDER_DOUBLE: BorderSet = BorderSet {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

/// Rounded corners
pub const BORDER_ROUNDED: BorderSet = BorderSet {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

impl BorderSet {
    /// Horizontal rule between two corners, `inner` glyphs long.
    pub fn rule(&self, left: char, right: char, inner: usize) -> String {
        let mut line = String::with_capacity((inner + 2) * self.horizontal.len_utf8());
        line.push(left);
        line.extend(std::iter::repeat(self.horizontal).take(inner));
        line.push(right);
        line
    }

    /// Top border, `inner` horizontal glyphs between the corners.
    pub fn top(&self, inner: usize) -> String {
        self.rule(self.top_left, self.top_right, inner)
    }

    /// Bottom border, `inner` horizontal glyphs between the corners.
    pub fn bottom(&self, inner: usize) -> String {
        self.rule(self.bottom_left, self.bottom_right, inner)
    }
}
