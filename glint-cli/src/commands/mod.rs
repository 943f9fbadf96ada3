//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use glint_core::ProfileRegistry;

pub mod generate_config;
pub mod highlight;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Highlight source files as HTML markup
    Highlight(highlight::HighlightArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a profile configuration file
    Validate(validate::ValidateArgs),

    /// Generate a profile configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in profiles and their aliases
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Highlight(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        let lines = match self {
            ListCommands::Languages => {
                let registry = ProfileRegistry::builtin()?;
                let mut lines = vec!["Built-in profiles:".to_string()];
                for profile in registry.profiles() {
                    let aliases = profile.aliases();
                    if aliases.is_empty() {
                        lines.push(format!("  {:<10} {}", profile.code(), profile.name()));
                    } else {
                        lines.push(format!(
                            "  {:<10} {} (aliases: {})",
                            profile.code(),
                            profile.name(),
                            aliases.join(", ")
                        ));
                    }
                }
                lines
            }
            ListCommands::Formats => vec![
                "Output formats:".to_string(),
                "  html  - Marked-up HTML fragment per file".to_string(),
                "  page  - Standalone HTML page with theme stylesheet".to_string(),
                "  json  - JSON with markup and token offsets".to_string(),
            ],
        };
        Ok(lines)
    }
}
