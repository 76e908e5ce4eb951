//! # Commands
//!
//! - `frisk scan` - Scan files for committed secrets
//! - `frisk rules` - List detection rules

mod commands;
mod files;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;
pub use frisk_core::CONFIG_FILENAME;
use frisk_core::prelude::*;

use crate::ui::colors;

fn parse_confidence(s: &str) -> Result<Confidence, String> {
    s.parse()
        .map_err(|_| format!("invalid confidence level '{s}' (expected 'low', 'medium', or 'high')"))
}

const REPO_URL: &str = "https://github.com/frisk-scanner/frisk";

#[derive(Debug, Parser)]
#[command(
    name = "frisk",
    version,
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    #[command(visible_alias = "r")]
    Rules(RulesArgs),
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Arguments for the `frisk scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Paths to scan for secrets.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to `.frisk.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum confidence level to report (low, medium, or high).
    #[arg(long, value_parser = parse_confidence)]
    pub minimum_confidence: Option<Confidence>,

    /// Always exit with code 0, even when secrets are found.
    #[arg(long)]
    pub exit_zero: bool,

    /// Glob patterns to exclude from scanning.
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Skip `.gitignore` rules when collecting files.
    #[arg(long)]
    pub skip_gitignore: bool,

    /// Skip files larger than this size in bytes.
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Number of files scanned in parallel.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Show score reasoning for each finding.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `frisk rules` command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Filter rules by category (e.g. `cloud`, `payments`).
    #[arg(short = 'g', long)]
    pub category: Option<String>,

    /// Path to `.frisk.toml` configuration file (for custom rules).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show rule details including regex and keywords.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    let cli = Cli::from_arg_matches(&matches).expect("failed to parse arguments");
    cli
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Rules(args) => commands::rules::run(&args),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} finds committed credentials before they ship.

  Matches branded token shapes, scores entropy and surrounding code
  context, and suggests environment variables to move secrets into.",
        colors::accent().apply_to("frisk").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    frisk scan .                     Scan current directory
    frisk scan src/ config/          Scan multiple paths
    frisk scan . --format json       Output as JSON
    frisk scan . --exclude 'vendor/**'
    frisk rules                      List detection rules
    frisk rules -g cloud --verbose   Inspect cloud provider rules

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
