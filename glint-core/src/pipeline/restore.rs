//! Sentinel restoration

use super::shield::{LiteralRegion, SentinelAlphabet};
use crate::error::{HighlightError, Result};
use crate::markup::push_span;

/// Replace every sentinel in `marked` with its literal, wrapped in the
/// marker for the literal's kind
///
/// Any sentinel bookkeeping mismatch is an internal invariant violation:
/// a malformed or unknown sentinel, a region restored twice, or a region
/// never restored.
pub fn restore(
    marked: &str,
    regions: &[LiteralRegion],
    alphabet: SentinelAlphabet,
) -> Result<String> {
    let extra: usize = regions.iter().map(|r| r.raw_text.len() + 32).sum();
    let mut out = String::with_capacity(marked.len() + extra);
    let mut restored = vec![false; regions.len()];
    let mut chars = marked.char_indices();
    let mut copied_to = 0;

    while let Some((at, ch)) = chars.next() {
        if !alphabet.contains(ch) {
            continue;
        }
        if !alphabet.is_open(ch) {
            return Err(HighlightError::Integrity(format!(
                "stray sentinel character at byte {at}"
            )));
        }
        out.push_str(&marked[copied_to..at]);

        let mut index: Option<usize> = None;
        loop {
            match chars.next() {
                Some((end, c)) if alphabet.is_close(c) => {
                    copied_to = end + c.len_utf8();
                    break;
                }
                Some((_, c)) => {
                    let digit = alphabet.digit_value(c).ok_or_else(|| {
                        HighlightError::Integrity(format!("malformed sentinel at byte {at}"))
                    })?;
                    index = Some(
                        index
                            .unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|v| v.checked_add(digit))
                            .ok_or_else(|| {
                                HighlightError::Integrity(format!(
                                    "sentinel index overflow at byte {at}"
                                ))
                            })?,
                    );
                }
                None => {
                    return Err(HighlightError::Integrity(format!(
                        "unterminated sentinel at byte {at}"
                    )))
                }
            }
        }

        let index = index.ok_or_else(|| {
            HighlightError::Integrity(format!("sentinel without index at byte {at}"))
        })?;
        let region = regions.get(index).ok_or_else(|| {
            HighlightError::Integrity(format!("sentinel {index} has no literal region"))
        })?;
        if std::mem::replace(&mut restored[index], true) {
            return Err(HighlightError::Integrity(format!(
                "literal region {index} restored twice"
            )));
        }
        push_span(&mut out, region.kind.category(), &region.raw_text);
    }
    out.push_str(&marked[copied_to..]);

    if let Some(missing) = restored.iter().position(|done| !done) {
        return Err(HighlightError::Integrity(format!(
            "literal region {missing} was not restored"
        )));
    }

    Ok(out)
}
