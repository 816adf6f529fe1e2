//! CLI definitions for claw-card
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use clap_complete::Shell as CompletionShell;

use crate::config::Profile;

/// Build clap styles matching the default card theme.
///
/// - Cyan: headers, usage, flag names (default accent)
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "claw-card")]
#[command(about = "claw-card - terminal business cards for AI agents")]
#[command(
    long_about = "claw-card - terminal business cards for AI agents.

Prints a box-drawn card with a name, an optional tagline and contact links,
aligned correctly even with colors and emoji icons.

EXAMPLES:
    claw-card --name \"Julian\" --tagline \"Digital Fixer\" --github julianthorne2jz
    claw-card --name \"Julian\" --style double --color magenta
    claw-card --config card.json --json

CONFIG:
    Values are read from ~/.config/claw-card/config.toml when it exists, then
    from --config (JSON, or TOML when the file ends in .toml), then from flags."
)]
#[command(version = crate::VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Agent name (required)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Short tagline
    #[arg(long, value_name = "TEXT")]
    pub tagline: Option<String>,

    /// Email address
    #[arg(long, value_name = "ADDRESS")]
    pub email: Option<String>,

    /// GitHub username
    #[arg(long, value_name = "USER")]
    pub github: Option<String>,

    /// Twitter/X handle
    #[arg(long, value_name = "HANDLE")]
    pub twitter: Option<String>,

    /// Website URL
    #[arg(long, value_name = "URL")]
    pub web: Option<String>,

    /// Card style: minimal, box, double, rounded (default: box)
    #[arg(long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Accent color: cyan, green, yellow, magenta, red, white (default: cyan)
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Output the profile as JSON (for automation)
    #[arg(long)]
    pub json: bool,

    /// Load values from a JSON or TOML file (a missing file is an error)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render without ANSI colors (also enabled by NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Print debug logs to stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, hide = true, value_name = "SHELL")]
    pub completions: Option<CompletionShell>,
}

impl Cli {
    /// Profile values given directly as flags.
    pub fn profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            email: self.email.clone(),
            github: self.github.clone(),
            twitter: self.twitter.clone(),
            web: self.web.clone(),
            style: self.style.clone(),
            color: self.color.clone(),
        }
    }
}
