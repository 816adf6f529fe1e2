//! Unit tests for the card renderer

use claw_card::card::{
    content_lines, render, render_all, render_lines, ContentLine, Emphasis, FieldSet,
    MIN_CONTENT_WIDTH,
};
use claw_card::theme::{resolve, Theme};
use claw_card::visible_width;

use super::helpers::{all_themes, assert_uniform_width, field_variants, full_fields};

#[test]
fn every_row_has_the_same_visible_width() {
    for theme in all_themes() {
        for fields in field_variants() {
            let card = render(&fields, &theme);
            assert_uniform_width(&card);
            assert_eq!(card.width(), card.box_width() + 2);
        }
    }
}

#[test]
fn one_character_name_gets_minimum_width() {
    let card = render(&FieldSet::named("A"), &Theme::default());
    assert_eq!(card.content_width(), MIN_CONTENT_WIDTH);
    assert_eq!(card.box_width(), 34);
}

#[test]
fn ada_example_renders_four_rows_of_36_columns() {
    let card = render(&FieldSet::named("Ada"), &resolve(Some("box"), Some("cyan")));
    let rows = card.rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(card.box_width(), 34);
    assert!(rows[1].contains("\x1b[1m\x1b[36mAda\x1b[0m"));
    for row in rows {
        assert_eq!(visible_width(row), 36);
    }
}

#[test]
fn longer_field_grows_box_to_fit_exactly() {
    let base = FieldSet::named("Ada");
    let base_width = render(&base, &Theme::default()).box_width();

    let web = "w".repeat(50);
    let wider = base.clone().web(web.clone());
    let card = render(&wider, &Theme::default());

    // icon (2) + space + text
    let line_len = 2 + 1 + web.len();
    assert_eq!(card.content_width(), line_len);
    assert_eq!(card.box_width(), line_len + 4);
    assert!(card.box_width() > base_width);
    assert!(card.rows().iter().any(|row| row.contains(&web)));
}

#[test]
fn shorter_field_does_not_change_width() {
    let base = render(&FieldSet::named("Ada"), &Theme::default());
    let with_email = render(&FieldSet::named("Ada").email("a@b.c"), &Theme::default());
    assert_eq!(base.box_width(), with_email.box_width());
}

#[test]
fn name_only_is_top_name_spacer_bottom() {
    let card = render(&FieldSet::named("Ada"), &Theme::default().plain());
    let rows = card.rows();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].starts_with('┌') && rows[0].ends_with('┐'));
    assert!(rows[1].starts_with("│ Ada "));
    assert_eq!(rows[2], format!("│{}│", " ".repeat(34)));
    assert!(rows[3].starts_with('└') && rows[3].ends_with('┘'));
}

#[test]
fn empty_field_set_is_borders_only() {
    let card = render(&FieldSet::default(), &Theme::default().plain());
    assert_eq!(card.rows().len(), 2);
    assert_eq!(card.rows()[0], format!("┌{}┐", "─".repeat(34)));
    assert_eq!(card.rows()[1], format!("└{}┘", "─".repeat(34)));
}

#[test]
fn full_card_line_order() {
    let lines = content_lines(&full_fields());
    let labels: Vec<Option<&str>> = lines.iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        vec![None, None, None, Some("📧"), Some("🐙"), Some("🐦"), Some("🌐")]
    );
    assert_eq!(lines[0].emphasis, Emphasis::Strong);
    assert_eq!(lines[1].emphasis, Emphasis::Muted);
    assert!(lines[2].is_spacer());
}

#[test]
fn tagline_without_name_still_gets_spacer() {
    let fields = FieldSet {
        tagline: Some("just a tagline".to_string()),
        ..FieldSet::default()
    };
    let lines = content_lines(&fields);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].is_spacer());
}

#[test]
fn tagline_is_dimmed() {
    let card = render(&FieldSet::named("Ada").tagline("hi"), &Theme::default());
    assert!(card.rows()[2].contains("\x1b[2mhi\x1b[0m"));
}

#[test]
fn borders_are_wrapped_in_accent_and_reset() {
    let theme = resolve(Some("double"), Some("yellow"));
    let card = render(&FieldSet::named("Ada"), &theme);
    assert!(card.rows()[0].starts_with("\x1b[33m╔"));
    assert!(card.rows()[0].ends_with("╗\x1b[0m"));
    assert!(card.rows()[1].starts_with("\x1b[33m║\x1b[0m "));
    assert!(card.rows()[1].ends_with(" \x1b[33m║\x1b[0m"));
}

#[test]
fn minimal_style_is_padding_only() {
    let card = render(&FieldSet::named("Ada"), &resolve(Some("minimal"), None).plain());
    assert_eq!(card.rows()[0], " ".repeat(36));
    assert!(card.rows()[1].starts_with("  Ada"));
    assert_uniform_width(&card);
}

#[test]
fn wide_glyph_name_is_padded_by_columns() {
    let card = render(&FieldSet::named("日本語"), &Theme::default().plain());
    let name_row = &card.rows()[1];
    // 6 columns of name, 26 spaces of padding inside a 34-wide box
    assert_eq!(name_row, &format!("│ 日本語{} │", " ".repeat(26)));
}

#[test]
fn long_values_are_never_truncated() {
    let long = "z".repeat(200);
    let card = render(&FieldSet::named(long.clone()), &Theme::default());
    assert!(card.rows()[1].contains(&long));
    assert_eq!(card.content_width(), 200);
}

#[test]
fn render_lines_accepts_prebuilt_lines() {
    let lines = vec![
        ContentLine::new("hello", Emphasis::Plain),
        ContentLine::spacer(),
        ContentLine::labeled("🌐", "example.com"),
    ];
    let card = render_lines(&lines, &Theme::default());
    assert_eq!(card.rows().len(), 5);
    assert_uniform_width(&card);
}

#[test]
fn render_all_keeps_input_order() {
    let cards: Vec<FieldSet> = (0..64)
        .map(|i| FieldSet::named(format!("agent-{}", "x".repeat(i))))
        .collect();
    let theme = Theme::default();

    let rendered = render_all(&cards, &theme);
    assert_eq!(rendered.len(), cards.len());
    for (fields, card) in cards.iter().zip(&rendered) {
        assert_eq!(card, &render(fields, &theme));
        assert_uniform_width(card);
    }
}

fn assert_prints_as_rows(fields: &FieldSet) {
    let card = render(fields, &Theme::default().plain());
    assert_eq!(card.to_string().lines().count(), card.rows().len());
    for row in card.rows() {
        assert!(!row.chars().any(char::is_control), "control char in {:?}", row);
    }
    assert_uniform_width(&card);
}

#[test]
fn tab_in_a_value_stays_on_its_row() {
    assert_prints_as_rows(&FieldSet::named("a\tb"));
    let card = render(&FieldSet::named("a\tb"), &Theme::default().plain());
    assert!(card.rows()[1].starts_with("│ a b "));
}

#[test]
fn newline_in_a_value_stays_on_its_row() {
    assert_prints_as_rows(&FieldSet::named("Ada").tagline("line one\nline two"));
    assert_prints_as_rows(&FieldSet::named("Ada").web("example.com\r\n"));
}

#[test]
fn colored_card_with_control_characters_keeps_row_count() {
    let card = render(&FieldSet::named("Ada").tagline("one\ntwo"), &Theme::default());
    assert_eq!(card.to_string().lines().count(), card.rows().len());
    assert_uniform_width(&card);
}
