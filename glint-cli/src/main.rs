//! glint command-line entry point

use clap::Parser;
use glint_cli::commands::Commands;

/// Highlight source code snippets as HTML
#[derive(Debug, Parser)]
#[command(name = "glint", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
