//! Unit tests for theme resolution

use claw_card::resolve;
use claw_card::theme::{
    Accent, CardStyle, Theme, BORDER_BOX, BORDER_DOUBLE, BORDER_MINIMAL, BORDER_ROUNDED,
};

#[test]
fn unknown_style_and_color_match_defaults() {
    assert_eq!(
        resolve(Some("not-a-style"), Some("not-a-color")),
        resolve(None, None)
    );
}

#[test]
fn default_is_box_and_cyan() {
    let theme = resolve(None, None);
    assert_eq!(theme, Theme::new(CardStyle::Box, Accent::Cyan));
    assert_eq!(theme.border, BORDER_BOX);
    assert_eq!(theme.accent, "\x1b[36m");
    assert_eq!(theme.reset, "\x1b[0m");
}

#[test]
fn every_style_name_selects_its_border() {
    let cases = [
        ("minimal", BORDER_MINIMAL),
        ("box", BORDER_BOX),
        ("double", BORDER_DOUBLE),
        ("rounded", BORDER_ROUNDED),
    ];
    for (name, border) in cases {
        assert_eq!(resolve(Some(name), None).border, border, "style {}", name);
    }
}

#[test]
fn every_color_name_selects_its_code() {
    let cases = [
        ("cyan", "\x1b[36m"),
        ("green", "\x1b[32m"),
        ("yellow", "\x1b[33m"),
        ("magenta", "\x1b[35m"),
        ("red", "\x1b[31m"),
        ("white", "\x1b[37m"),
    ];
    for (name, code) in cases {
        assert_eq!(resolve(None, Some(name)).accent, code, "color {}", name);
    }
}

#[test]
fn codes_that_are_not_accents_are_rejected() {
    // Only the six accents are colors; styling codes are not selectable
    for name in ["reset", "bold", "dim", "blue"] {
        assert_eq!(resolve(None, Some(name)).color, Accent::Cyan, "color {}", name);
    }
}

#[test]
fn resolution_is_shareable_across_threads() {
    let handles: Vec<_> = CardStyle::ALL
        .into_iter()
        .map(|style| std::thread::spawn(move || resolve(Some(style.name()), Some("red"))))
        .collect();
    for handle in handles {
        let theme = handle.join().unwrap();
        assert_eq!(theme.color, Accent::Red);
    }
}
