//! Style marker syntax and the token view of a highlighted document
//!
//! A highlighted document is escaped source text interleaved with flat,
//! non-nested markers of the form `<span class="hl-keyword">…</span>`.
//! Marker names contain only lowercase ASCII letters, so no classifier
//! pattern over identifiers, digits or capitals can see into them.

use crate::category::Category;
use crate::error::{HighlightError, Result};
use crate::escape::decode_entity;
use serde::{Deserialize, Serialize};

const OPEN_PREFIX: &str = "<span class=\"hl-";
const OPEN_SUFFIX: &str = "\">";
const CLOSE: &str = "</span>";

/// CSS class carried by the marker for `category`
pub fn css_class(category: Category) -> String {
    format!("hl-{}", category.name())
}

/// Append `text` wrapped in the marker for `category`
pub(crate) fn push_span(out: &mut String, category: Category, text: &str) {
    out.push_str(OPEN_PREFIX);
    out.push_str(category.name());
    out.push_str(OPEN_SUFFIX);
    out.push_str(text);
    out.push_str(CLOSE);
}

/// A classified span of the original source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Category of the span
    pub category: Category,
    /// Original (unescaped) text
    pub text: String,
    /// Byte offset of the first character in the original source
    pub start: usize,
    /// Byte offset one past the last character in the original source
    pub end: usize,
}

/// Remove every marker, leaving escaped text
pub fn strip_markers(document: &str) -> String {
    let mut out = String::with_capacity(document.len());
    let mut rest = document;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];
        match tail.find('>') {
            Some(gt) => rest = &tail[gt + 1..],
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse a highlighted document into its classified tokens
///
/// Offsets refer to the original source, recovered by un-escaping the
/// visible text. Unmarked text produces no token.
pub fn tokens(document: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut open: Option<(Category, usize, String)> = None;
    let mut offset = 0usize;
    let mut i = 0usize;

    while i < document.len() {
        let tail = &document[i..];

        if tail.starts_with(CLOSE) {
            let (category, start, text) = open.take().ok_or_else(|| {
                HighlightError::Integrity(format!("unbalanced marker close at byte {i}"))
            })?;
            tokens.push(Token {
                category,
                text,
                start,
                end: offset,
            });
            i += CLOSE.len();
        } else if let Some(after) = tail.strip_prefix(OPEN_PREFIX) {
            if open.is_some() {
                return Err(HighlightError::Integrity(format!(
                    "nested marker at byte {i}"
                )));
            }
            let name_len = after.find(OPEN_SUFFIX).ok_or_else(|| {
                HighlightError::Integrity(format!("unterminated marker at byte {i}"))
            })?;
            let category = Category::from_name(&after[..name_len]).ok_or_else(|| {
                HighlightError::Integrity(format!(
                    "unknown marker category '{}'",
                    &after[..name_len]
                ))
            })?;
            open = Some((category, offset, String::new()));
            i += OPEN_PREFIX.len() + name_len + OPEN_SUFFIX.len();
        } else if tail.starts_with('<') {
            return Err(HighlightError::Integrity(format!(
                "unexpected markup at byte {i}"
            )));
        } else {
            let (ch, consumed) = match decode_entity(tail) {
                Some(decoded) => decoded,
                None => {
                    let ch = tail.chars().next().unwrap_or_default();
                    (ch, ch.len_utf8())
                }
            };
            if let Some((_, _, text)) = open.as_mut() {
                text.push(ch);
            }
            offset += ch.len_utf8();
            i += consumed;
        }
    }

    if open.is_some() {
        return Err(HighlightError::Integrity(
            "document ends inside a marker".to_string(),
        ));
    }

    Ok(tokens)
}
