//! Profile configuration schema
//!
//! This module defines the TOML schema for language profiles.

use crate::error::{HighlightError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Root profile configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    pub literals: Literals,
    #[serde(default)]
    pub patterns: Patterns,
    #[serde(default)]
    pub keywords: WordSet,
    #[serde(default)]
    pub builtins: WordSet,
}

/// Profile metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Extra registry keys resolving to this profile
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Literal regions shielded from classification
///
/// Markers are written as they appear in source; they are escaped before
/// matching because shielding runs on escaped text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literals {
    /// Quote characters opening and closing a same-line string literal
    #[serde(default)]
    pub quotes: Vec<char>,
    /// Marker starting a comment that runs to end of line
    #[serde(default)]
    pub line_comment: Option<String>,
    #[serde(default)]
    pub block_comment: Option<BlockComment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockComment {
    pub open: String,
    pub close: String,
}

/// Token patterns (regular expressions)
///
/// When a pattern has a capture group, group 1 is the styled span and the
/// rest of the match is context only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patterns {
    #[serde(default = "default_annotation")]
    pub annotation: String,
    #[serde(default = "default_function_call")]
    pub function_call: String,
    #[serde(default = "default_number")]
    pub number: String,
    /// Capitalized-identifier heuristic; absent disables the pass
    #[serde(default)]
    pub type_name: Option<String>,
    /// Keep keywords written as `if(` out of the function-call pass
    #[serde(default)]
    pub calls_exclude_keywords: bool,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            annotation: default_annotation(),
            function_call: default_function_call(),
            number: default_number(),
            type_name: None,
            calls_exclude_keywords: false,
        }
    }
}

/// A set of exact words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSet {
    #[serde(default)]
    pub words: Vec<String>,
}

fn default_annotation() -> String {
    r"@[A-Za-z_]\w*".to_string()
}

fn default_function_call() -> String {
    r"\b([A-Za-z_]\w*)\(".to_string()
}

fn default_number() -> String {
    r"\b[0-9]+\b".to_string()
}

impl ProfileConfig {
    /// Parse a profile from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HighlightError::ProfileParse(e.to_string()))
    }

    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HighlightError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    ///
    /// Regular expressions are checked when the profile is compiled.
    pub(crate) fn validate(&self) -> Result<()> {
        let code = self.metadata.code.as_str();

        if code.trim().is_empty() {
            return Err(HighlightError::invalid_profile(code, "empty profile code"));
        }
        if self.metadata.name.trim().is_empty() {
            return Err(HighlightError::invalid_profile(code, "empty profile name"));
        }
        if self.metadata.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(HighlightError::invalid_profile(code, "empty alias"));
        }

        for &quote in &self.literals.quotes {
            if quote.is_alphanumeric() || quote.is_whitespace() || "&<>_".contains(quote) {
                return Err(HighlightError::invalid_profile(
                    code,
                    format!("unusable quote character {quote:?}"),
                ));
            }
        }
        if matches!(&self.literals.line_comment, Some(marker) if marker.is_empty()) {
            return Err(HighlightError::invalid_profile(
                code,
                "empty line comment marker",
            ));
        }
        if let Some(block) = &self.literals.block_comment {
            if block.open.is_empty() || block.close.is_empty() {
                return Err(HighlightError::invalid_profile(
                    code,
                    "empty block comment marker",
                ));
            }
        }

        for word in self.keywords.words.iter().chain(&self.builtins.words) {
            if word.is_empty() || !word.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(HighlightError::invalid_profile(
                    code,
                    format!("'{word}' is not a plain word"),
                ));
            }
        }

        let keywords: HashSet<&str> = self.keywords.words.iter().map(String::as_str).collect();
        if let Some(shared) = self
            .builtins
            .words
            .iter()
            .find(|w| keywords.contains(w.as_str()))
        {
            return Err(HighlightError::invalid_profile(
                code,
                format!("'{shared}' is both a keyword and a builtin"),
            ));
        }

        Ok(())
    }
}
