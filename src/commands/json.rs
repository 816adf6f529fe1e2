//! JSON output handler

use anyhow::{Context, Result};

use claw_card::Profile;

/// Print the profile's identity fields as pretty JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(profile: &Profile) -> Result<()> {
    println!("{}", to_json(profile)?);
    Ok(())
}

/// Pretty JSON for a profile; absent fields are omitted.
pub fn to_json(profile: &Profile) -> Result<String> {
    let view = profile.to_json()?;
    serde_json::to_string_pretty(&view).context("Failed to serialize profile")
}
