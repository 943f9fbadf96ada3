//! Language source management for CLI

use anyhow::{Context, Result};
use glint_core::{LanguageProfile, ProfileConfig, ProfileRegistry};
use std::path::{Path, PathBuf};

/// Source of the profile used for highlighting
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Built-in profile key or alias
    BuiltIn(String),
    /// External profile configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(key) => format!("Built-in: {key}"),
            LanguageSource::External {
                path,
                language_code,
            } => {
                if let Some(code) = language_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }

    /// Make the profile available in `registry` and return its key
    pub fn resolve(&self, registry: &mut ProfileRegistry) -> Result<String> {
        match self {
            LanguageSource::BuiltIn(key) => Ok(key.clone()),
            LanguageSource::External {
                path,
                language_code,
            } => {
                let mut config = ProfileConfig::from_file(path)?;
                if let Some(code) = language_code {
                    config.metadata.code = code.clone();
                }
                let code = config.metadata.code.clone();
                let profile = LanguageProfile::from_config(config)
                    .with_context(|| format!("Invalid profile in {}", path.display()))?;
                registry.register_with_aliases(profile)?;
                log::info!("Loaded external profile '{code}' from {}", path.display());
                Ok(code)
            }
        }
    }
}

/// Built-in profile key suggested by a file extension
pub fn infer_language(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "java" => Some("java"),
        "py" | "pyw" | "pyi" => Some("python"),
        "c" | "h" | "cc" | "cpp" | "hpp" | "cs" | "kt" | "scala" | "js" | "ts" => Some("c-like"),
        _ => None,
    }
}
