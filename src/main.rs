//! claw-card - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use claw_card::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        return commands::completions::handle(shell);
    }

    let profile = commands::resolve_profile(&cli)?;

    if cli.json {
        commands::json::handle(&profile)
    } else {
        commands::card::handle(&profile, commands::use_color(cli.no_color))
    }
}

/// Log to stderr. `--verbose` forces debug output for this crate; otherwise
/// `RUST_LOG` applies, defaulting to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("claw_card=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
