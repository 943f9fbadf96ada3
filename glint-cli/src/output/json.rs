//! JSON output formatter

use super::{HighlightedFile, OutputFormatter};
use anyhow::Result;
use glint_core::Token;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs highlighted files as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    files: Vec<FileData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct FileData {
    /// Input path or `<stdin>`
    pub source: String,
    /// Profile code
    pub language: String,
    /// Highlighted markup
    pub html: String,
    /// Classified tokens with offsets into the original text
    pub tokens: Vec<Token>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            files: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_file(&mut self, file: &HighlightedFile) -> Result<()> {
        self.files.push(FileData {
            source: file.source.clone(),
            language: file.language.clone(),
            html: file.html.clone(),
            tokens: file.tokens.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.files)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.files)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
