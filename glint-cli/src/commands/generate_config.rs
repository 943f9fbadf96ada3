//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new profile
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating profile configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the keyword and builtin lists for your language");
        println!("2. Validate your configuration:");
        println!(
            "   glint validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for highlighting:");
        println!(
            "   glint highlight -i snippet.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Highlighting profile for {code}

[metadata]
code = "{code}"
name = "Custom Language"
# Extra keys that select this profile
aliases = []

# Regions shielded from every other rule
[literals]
# Same-line string literals, one entry per quote character
quotes = ['"', "'"]
# Comment running to end of line
line_comment = "//"
# Delimited comment, may span lines
block_comment = {{ open = "/*", close = "*/" }}

# Regular expressions; when a pattern has a capture group,
# group 1 is the highlighted span
[patterns]
annotation = '@[A-Za-z_]\w*'
function_call = '\b([A-Za-z_]\w*)\('
number = '\b[0-9]+\b'
# Capitalized identifiers as type names (remove to disable)
type_name = '\b[A-Z]\w*\b'
# Set to true so `if(x)` stays a keyword instead of a call
calls_exclude_keywords = false

[keywords]
words = ["if", "else", "for", "while", "return"]

[builtins]
words = ["true", "false", "null"]
"#,
            code = self.language_code
        )
    }
}
