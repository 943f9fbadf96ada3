//! Token classification
//!
//! Passes run in the profile's precedence order over the whole shielded
//! text. Instead of re-scanning decorated output, claimed byte ranges are
//! tracked as intervals: a match is accepted only if its span is still
//! free. Sentinels and escaper entities are claimed before the first pass,
//! so no pass can match into them.

use super::shield::Shielded;
use crate::category::Category;
use crate::escape::entity_ranges;
use crate::markup::push_span;
use crate::profile::LanguageProfile;
use std::collections::BTreeMap;
use std::ops::Range;

/// A classified span of the shielded text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub range: Range<usize>,
    pub category: Category,
}

/// Non-overlapping claimed intervals, keyed by start
#[derive(Debug, Default)]
struct Claims {
    intervals: BTreeMap<usize, usize>,
}

impl Claims {
    fn is_free(&self, range: &Range<usize>) -> bool {
        self.intervals
            .range(..range.end)
            .next_back()
            .map_or(true, |(_, &end)| end <= range.start)
    }

    fn claim(&mut self, range: &Range<usize>) {
        self.intervals.insert(range.start, range.end);
    }
}

/// Output of the classifier stage
#[derive(Debug)]
pub struct Classified<'a> {
    text: &'a str,
    spans: Vec<StyledSpan>,
}

impl<'a> Classified<'a> {
    /// Spans in text order
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Shielded text with markers inserted; sentinels are left in place
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + self.spans.len() * 32);
        let mut pos = 0;
        for span in &self.spans {
            out.push_str(&self.text[pos..span.range.start]);
            push_span(&mut out, span.category, &self.text[span.range.clone()]);
            pos = span.range.end;
        }
        out.push_str(&self.text[pos..]);
        out
    }
}

/// Run every classifier pass of `profile` over the shielded text
pub fn classify<'a>(shielded: &'a Shielded, profile: &LanguageProfile) -> Classified<'a> {
    let text = shielded.text.as_str();
    let mut claims = Claims::default();

    for sentinel in &shielded.sentinels {
        claims.claim(sentinel);
    }
    for entity in entity_ranges(text) {
        claims.claim(&entity);
    }

    let mut spans = Vec::new();
    for pass in profile.passes() {
        let before = spans.len();
        for caps in pass.regex.captures_iter(text) {
            let Some(found) = caps.get(1).or_else(|| caps.get(0)) else {
                continue;
            };
            let range = found.range();
            if range.is_empty() || pass.excluded.contains(found.as_str()) {
                continue;
            }
            if claims.is_free(&range) {
                claims.claim(&range);
                spans.push(StyledSpan {
                    range,
                    category: pass.category,
                });
            }
        }
        log::trace!("{} pass claimed {} span(s)", pass.category, spans.len() - before);
    }

    spans.sort_by_key(|span| span.range.start);
    Classified { text, spans }
}
