//! Highlight command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, Input};
use crate::language_source::{infer_language, LanguageSource};
use crate::output::{
    HighlightedFile, HtmlFormatter, JsonFormatter, OutputFormatter, PageFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use glint_core::{Highlighter, ProfileRegistry};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the highlight command
#[derive(Debug, Args)]
pub struct HighlightArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else html)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Profile key or alias (default: inferred from extension, else config)
    #[arg(short, long, value_name = "KEY", conflicts_with = "language_config")]
    pub language: Option<String>,

    /// External profile configuration file
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Override the code of the external profile
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Marked-up HTML fragment per file
    Html,
    /// Standalone HTML page with a theme stylesheet
    Page,
    /// JSON with markup and token offsets
    Json,
}

impl HighlightArgs {
    /// Execute the highlight command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting highlighting");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let mut registry = ProfileRegistry::builtin()?;
        let fixed_key = match self.language_source() {
            Some(source) => {
                log::info!("Language source: {}", source.display_name());
                let key = source.resolve(&mut registry)?;
                if !registry.contains(&key) {
                    return Err(CliError::UnknownLanguage(key).into());
                }
                Some(key)
            }
            None => None,
        };

        let format = self.output_format(&config)?;
        let inputs = resolve_inputs(&self.input)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Page => Box::new(PageFormatter::new(writer, config.theme.clone())),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        for input in &inputs {
            let name = input.display_name();
            let text = input.read_text()?;
            let key = self.profile_key(input, fixed_key.as_deref(), &config);

            let profile = registry
                .get(&key)
                .map_err(|_| CliError::UnknownLanguage(key.clone()))?;
            log::debug!("Highlighting {name} with profile {}", profile.code());

            let html = Highlighter::new(profile)
                .highlight(&text)
                .map_err(|e| CliError::HighlightError(format!("{name}: {e}")))?;
            let tokens = if format == OutputFormat::Json {
                glint_core::tokens(&html)
                    .map_err(|e| CliError::HighlightError(format!("{name}: {e}")))?
            } else {
                Vec::new()
            };

            formatter.format_file(&HighlightedFile {
                source: name.clone(),
                language: profile.code().to_string(),
                html,
                tokens,
            })?;
            progress.file_completed(&name);
        }

        progress.finish();
        formatter.finish()?;

        log::info!("Highlighted {} input(s)", inputs.len());
        Ok(())
    }

    /// Explicitly requested profile source, if any
    fn language_source(&self) -> Option<LanguageSource> {
        if let Some(path) = &self.language_config {
            Some(LanguageSource::External {
                path: path.clone(),
                language_code: self.language_code.clone(),
            })
        } else {
            self.language.clone().map(LanguageSource::BuiltIn)
        }
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Profile key for one input: explicit choice, then file extension,
    /// then the configured default
    fn profile_key(&self, input: &Input, fixed_key: Option<&str>, config: &CliConfig) -> String {
        fixed_key
            .or_else(|| input.path().and_then(infer_language))
            .unwrap_or(config.highlight.default_language.as_str())
            .to_string()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed (tests, embedding)
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
