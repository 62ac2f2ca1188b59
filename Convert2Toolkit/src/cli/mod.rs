//! Convert2Toolkit CLI - build toolkit projects from converted workspaces

pub mod commands;
pub mod progress;
pub mod prompt;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use tracing::Level;

use crate::config::BuildSettings;

#[derive(Parser)]
#[command(name = "convert2toolkit")]
#[command(about = "Convert2Toolkit: assemble converted BG3 workspaces into toolkit projects", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (default: ./convert2toolkit.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output and show converter output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the Convert2Toolkit CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let mut settings = BuildSettings::load(cli.config.as_deref())?;
    settings.verbose |= cli.verbose;

    cli.command.execute(&settings)?;

    Ok(())
}
