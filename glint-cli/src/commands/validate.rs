//! Validate command implementation

use anyhow::Result;
use clap::Args;
use glint_core::{Highlighter, LanguageProfile};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to profile configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,

    /// Optional snippet to highlight with the profile as a smoke test
    #[arg(short, long, value_name = "CODE")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating profile configuration: {}",
            self.language_config.display()
        );

        let profile = match LanguageProfile::from_file(&self.language_config) {
            Ok(profile) => profile,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        println!("✓ Configuration is valid!");
        println!("  Profile code: {}", profile.code());
        println!("  Profile name: {}", profile.name());
        if !profile.aliases().is_empty() {
            println!("  Aliases: {}", profile.aliases().join(", "));
        }
        println!(
            "  Keywords: {}, builtins: {}",
            profile.config().keywords.words.len(),
            profile.config().builtins.words.len()
        );
        println!(
            "  Type heuristic: {}",
            if profile.has_type_heuristic() {
                "enabled"
            } else {
                "disabled"
            }
        );

        if let Some(sample) = &self.sample {
            let html = Highlighter::new(&profile)
                .highlight(sample)
                .map_err(|e| anyhow::anyhow!("Sample failed to highlight: {}", e))?;
            println!("  Sample: {html}");
        }

        Ok(())
    }
}
