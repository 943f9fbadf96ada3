//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use glint_core::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Highlighting configuration
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Colour theme for standalone pages
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Highlighting-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Profile key used when `--language` is not given
    pub default_language: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            default_language: "java".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "html".to_string(),
            pretty_json: true,
        }
    }
}

/// CSS colours per category, VS Code dark palette by default
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub foreground: String,
    pub annotation: String,
    pub function: String,
    pub keyword: String,
    pub builtin: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub number: String,
    pub string: String,
    pub comment: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d4d4d4".to_string(),
            annotation: "#4ec9b0".to_string(),
            function: "#dcdcaa".to_string(),
            keyword: "#c586c0".to_string(),
            builtin: "#569cd6".to_string(),
            type_name: "#4ec9b0".to_string(),
            number: "#b5cea8".to_string(),
            string: "#ce9178".to_string(),
            comment: "#6a9955".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Colour for a category
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Annotation => &self.annotation,
            Category::Function => &self.function,
            Category::Keyword => &self.keyword,
            Category::Builtin => &self.builtin,
            Category::Type => &self.type_name,
            Category::Number => &self.number,
            Category::String => &self.string,
            Category::Comment => &self.comment,
        }
    }

    /// Stylesheet for highlighted markup
    pub fn stylesheet(&self) -> String {
        let mut css = format!(
            "pre.glint {{ background: {}; color: {}; padding: 1em; overflow-x: auto; }}\n",
            self.background, self.foreground
        );
        for category in Category::ALL {
            css.push_str(&format!(
                ".{} {{ color: {}; }}\n",
                glint_core::css_class(category),
                self.color(category)
            ));
        }
        css
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }
}
