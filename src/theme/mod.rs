//! Card themes: border glyphs plus accent styling.
//!
//! A [`Theme`] is resolved once per card from a style name and a color name.
//! Resolution is total: unknown or missing names fall back to [`CardStyle::Box`]
//! and [`Accent::Cyan`] so a bad `--style` or `--color` never stops a card
//! from rendering.

use tracing::debug;

pub mod ansi;
pub mod border;

pub use ansi::{ANSI_BOLD, ANSI_DIM, ANSI_RESET};
pub use border::{BorderSet, BORDER_BOX, BORDER_DOUBLE, BORDER_MINIMAL, BORDER_ROUNDED};

/// Frame style of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardStyle {
    Minimal,
    #[default]
    Box,
    Double,
    Rounded,
}

impl CardStyle {
    /// Every style, in the order they are documented.
    pub const ALL: [CardStyle; 4] = [
        CardStyle::Minimal,
        CardStyle::Box,
        CardStyle::Double,
        CardStyle::Rounded,
    ];

    /// Look up a style by name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
    }

    pub const fn name(self) -> &'static str {
        match self {
            CardStyle::Minimal => "minimal",
            CardStyle::Box => "box",
            CardStyle::Double => "double",
            CardStyle::Rounded => "rounded",
        }
    }

    pub const fn border(self) -> BorderSet {
        match self {
            CardStyle::Minimal => BORDER_MINIMAL,
            CardStyle::Box => BORDER_BOX,
            CardStyle::Double => BORDER_DOUBLE,
            CardStyle::Rounded => BORDER_ROUNDED,
        }
    }
}

/// Accent color used for the frame and the card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accent {
    #[default]
    Cyan,
    Green,
    Yellow,
    Magenta,
    Red,
    White,
}

impl Accent {
    /// Every accent, in the order they are documented.
    pub const ALL: [Accent; 6] = [
        Accent::Cyan,
        Accent::Green,
        Accent::Yellow,
        Accent::Magenta,
        Accent::Red,
        Accent::White,
    ];

    /// Look up an accent by name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|accent| accent.name().eq_ignore_ascii_case(name))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Green => "green",
            Accent::Yellow => "yellow",
            Accent::Magenta => "magenta",
            Accent::Red => "red",
            Accent::White => "white",
        }
    }

    /// ANSI foreground escape for this accent.
    pub const fn code(self) -> &'static str {
        match self {
            Accent::Cyan => ansi::fg::CYAN,
            Accent::Green => ansi::fg::GREEN,
            Accent::Yellow => ansi::fg::YELLOW,
            Accent::Magenta => ansi::fg::MAGENTA,
            Accent::Red => ansi::fg::RED,
            Accent::White => ansi::fg::WHITE,
        }
    }
}

/// A resolved card theme.
///
/// Styling codes are plain `&'static str` escapes; a [plain](Theme::plain)
/// theme has every code empty and renders without any escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub style: CardStyle,
    pub color: Accent,
    /// Frame glyphs
    pub border: BorderSet,
    /// Accent color escape (frame and name)
    pub accent: &'static str,
    /// Bold escape (name)
    pub bold: &'static str,
    /// Dim escape (tagline)
    pub dim: &'static str,
    /// Reset escape closing every styled span
    pub reset: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(CardStyle::default(), Accent::default())
    }
}

impl Theme {
    pub const fn new(style: CardStyle, color: Accent) -> Self {
        Self {
            style,
            color,
            border: style.border(),
            accent: color.code(),
            bold: ANSI_BOLD,
            dim: ANSI_DIM,
            reset: ANSI_RESET,
        }
    }

    /// Same frame, no escape sequences at all.
    pub const fn plain(self) -> Self {
        Self {
            accent: "",
            bold: "",
            dim: "",
            reset: "",
            ..self
        }
    }
}

/// Resolve style and color names into a theme.
///
/// Never fails: missing or unrecognized names fall back to `box` and `cyan`.
pub fn resolve(style: Option<&str>, color: Option<&str>) -> Theme {
    let card_style = match style {
        Some(name) => CardStyle::from_name(name).unwrap_or_else(|| {
            debug!(
                requested = %name,
                fallback = CardStyle::default().name(),
                "Unknown card style"
            );
            CardStyle::default()
        }),
        None => CardStyle::default(),
    };

    let accent = match color {
        Some(name) => Accent::from_name(name).unwrap_or_else(|| {
            debug!(
                requested = %name,
                fallback = Accent::default().name(),
                "Unknown accent color"
            );
            Accent::default()
        }),
        None => Accent::default(),
    };

    Theme::new(card_style, accent)
}
