//! Card output handler

use anyhow::Result;

use claw_card::{card, Profile};

/// Validate the profile, render its card and print it.
#[cfg(not(tarpaulin_include))]
pub fn handle(profile: &Profile, color: bool) -> Result<()> {
    println!("{}", render(profile, color)?);
    Ok(())
}

/// Rendered card text for a profile.
pub fn render(profile: &Profile, color: bool) -> Result<String> {
    profile.validate()?;

    let theme = if color {
        profile.theme()
    } else {
        profile.theme().plain()
    };

    Ok(card::render(&profile.to_field_set(), &theme).to_string())
}
