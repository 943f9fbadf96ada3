//! Standalone HTML page output formatter

use super::{HighlightedFile, OutputFormatter};
use crate::config::ThemeConfig;
use anyhow::Result;
use std::io::Write;

/// Collects every file into one self-contained HTML page styled by a theme
pub struct PageFormatter<W: Write> {
    writer: W,
    theme: ThemeConfig,
    sections: Vec<(String, String, String)>,
}

impl<W: Write> PageFormatter<W> {
    /// Create a new page formatter
    pub fn new(writer: W, theme: ThemeConfig) -> Self {
        Self {
            writer,
            theme,
            sections: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for PageFormatter<W> {
    fn format_file(&mut self, file: &HighlightedFile) -> Result<()> {
        self.sections.push((
            glint_core::escape_markup(&file.source),
            glint_core::escape_markup(&file.language),
            file.html.clone(),
        ));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"utf-8\">")?;
        writeln!(self.writer, "<title>glint</title>")?;
        writeln!(self.writer, "<style>\n{}</style>", self.theme.stylesheet())?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        for (source, language, html) in &self.sections {
            writeln!(self.writer, "<h3>{source}</h3>")?;
            writeln!(
                self.writer,
                "<pre class=\"glint\"><code class=\"language-{language}\">{html}</code></pre>"
            )?;
        }
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}
