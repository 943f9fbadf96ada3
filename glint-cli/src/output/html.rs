//! HTML fragment output formatter

use super::{HighlightedFile, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Writes each file's markup as a bare fragment
///
/// Each fragment is preceded by a comment naming the source and profile.
pub struct HtmlFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML fragment formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_file(&mut self, file: &HighlightedFile) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        // Source names come from the command line; keep them out of markup
        let name = glint_core::escape_markup(&file.source).replace("--", "- -");
        writeln!(self.writer, "<!-- {name} ({}) -->", file.language)?;
        self.writer.write_all(file.html.as_bytes())?;
        if !file.html.ends_with('\n') {
            writeln!(self.writer)?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
