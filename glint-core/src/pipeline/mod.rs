//! The highlighting pipeline
//!
//! Escaper → Shield → Classifier → Restorer. Each stage consumes the full
//! output of the previous one; no stage is skipped or reordered.

pub mod classify;
pub mod restore;
pub mod shield;

pub use classify::{Classified, StyledSpan};
pub use shield::{LiteralRegion, SentinelAlphabet, Shielded};

use crate::error::Result;
use crate::escape::escape_markup;
use crate::markup::{self, Token};
use crate::profile::LanguageProfile;

/// Runs the pipeline for one profile
///
/// Holds no state besides the borrowed profile, so a highlighter can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'p> {
    profile: &'p LanguageProfile,
}

impl<'p> Highlighter<'p> {
    pub fn new(profile: &'p LanguageProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'p LanguageProfile {
        self.profile
    }

    /// Highlight `source`, returning escaped text with style markers
    pub fn highlight(&self, source: &str) -> Result<String> {
        if source.is_empty() {
            return Ok(String::new());
        }

        let escaped = escape_markup(source);
        let shielded = shield::shield(&escaped, self.profile)?;
        let classified = classify::classify(&shielded, self.profile);
        let marked = classified.render();
        let document = restore::restore(&marked, &shielded.regions, shielded.alphabet)?;

        log::trace!(
            "highlighted {} bytes with profile {}: {} literal(s), {} token(s)",
            source.len(),
            self.profile.code(),
            shielded.regions.len(),
            classified.spans().len()
        );
        Ok(document)
    }

    /// Highlight `source` and return its classified tokens
    pub fn tokens(&self, source: &str) -> Result<Vec<Token>> {
        markup::tokens(&self.highlight(source)?)
    }
}
