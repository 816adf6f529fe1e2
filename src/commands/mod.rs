//! Command handlers for the claw-card CLI.
//!
//! Each submodule handles one output mode. The dispatch logic remains in main.rs.

pub mod card;
pub mod completions;
pub mod json;

use anyhow::{Context, Result};
use tracing::debug;

use claw_card::cli::Cli;
use claw_card::config::{self, Profile};

/// Layer the default config file, the `--config` file and the flags.
pub fn resolve_profile(cli: &Cli) -> Result<Profile> {
    let mut profile = config::load_default().context("Failed to load default config")?;

    if let Some(path) = &cli.config {
        let from_file = config::load_file(path)?;
        profile = profile.merge(from_file);
    }

    let profile = profile.merge(cli.profile());
    debug!(
        style = ?profile.style,
        color = ?profile.color,
        json = cli.json,
        "Resolved profile"
    );
    Ok(profile)
}

/// Whether card output should carry ANSI colors.
///
/// `--no-color` and a non-empty `NO_COLOR` both turn colors off.
pub fn use_color(no_color_flag: bool) -> bool {
    !no_color_flag && !no_color_env(std::env::var_os("NO_COLOR").as_deref())
}

fn no_color_env(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
