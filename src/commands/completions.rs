//! Completions handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io;

use claw_card::cli::Cli;

/// Print a completion script for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(shell: CompletionShell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "claw-card", &mut io::stdout());
    Ok(())
}
