//! Output formatting module

use anyhow::Result;
use glint_core::Token;

/// One highlighted input
#[derive(Debug, Clone)]
pub struct HighlightedFile {
    /// Display name of the input (path or `<stdin>`)
    pub source: String,
    /// Profile code used
    pub language: String,
    /// Highlighted markup
    pub html: String,
    /// Classified tokens of the original text
    pub tokens: Vec<Token>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one highlighted file
    fn format_file(&mut self, file: &HighlightedFile) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod page;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use page::PageFormatter;
