//! Literal-region shielding
//!
//! String literals and comments are lifted out of the escaped text before
//! classification and replaced by sentinels. A sentinel is built from a
//! small alphabet of private-use characters: an open mark, one digit mark
//! per decimal digit of the region index, and a close mark. None of these
//! characters is a word character, digit or capital letter, so identifier
//! and number patterns cannot match into a sentinel.

use crate::error::{HighlightError, Result};
use crate::escape::entity_ranges;
use crate::profile::{LanguageProfile, LiteralKind};
use regex::{Match, Regex};
use std::ops::Range;

/// A shielded literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralRegion {
    /// Discovery order, embedded in the sentinel
    pub index: usize,
    /// Escaped text of the literal, delimiters included
    pub raw_text: String,
    pub kind: LiteralKind,
}

/// Characters used to build sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelAlphabet {
    open: char,
    close: char,
    digit_base: char,
}

/// Candidate alphabets, tried in order until one is absent from the input
pub(crate) const SENTINEL_ALPHABETS: [SentinelAlphabet; 3] = [
    SentinelAlphabet {
        open: '\u{E000}',
        close: '\u{E001}',
        digit_base: '\u{E010}',
    },
    SentinelAlphabet {
        open: '\u{F0000}',
        close: '\u{F0001}',
        digit_base: '\u{F0010}',
    },
    SentinelAlphabet {
        open: '\u{100000}',
        close: '\u{100001}',
        digit_base: '\u{100010}',
    },
];

impl SentinelAlphabet {
    /// Whether `ch` belongs to this alphabet
    pub fn contains(&self, ch: char) -> bool {
        ch == self.open || ch == self.close || self.digit_value(ch).is_some()
    }

    pub(crate) fn is_open(&self, ch: char) -> bool {
        ch == self.open
    }

    pub(crate) fn is_close(&self, ch: char) -> bool {
        ch == self.close
    }

    pub(crate) fn digit_value(&self, ch: char) -> Option<usize> {
        let offset = (ch as u32).checked_sub(self.digit_base as u32)?;
        (offset < 10).then_some(offset as usize)
    }

    /// Sentinel text for a region index
    pub fn sentinel(&self, index: usize) -> String {
        let mut out = String::new();
        out.push(self.open);
        for digit in index.to_string().bytes() {
            let value = u32::from(digit - b'0');
            // digit_base + 0..=9 stays inside the private-use block
            if let Some(ch) = char::from_u32(self.digit_base as u32 + value) {
                out.push(ch);
            }
        }
        out.push(self.close);
        out
    }

    /// First candidate alphabet with no character in `text`
    pub(crate) fn select(text: &str) -> Result<Self> {
        let chosen = SENTINEL_ALPHABETS
            .iter()
            .position(|alphabet| !text.chars().any(|c| alphabet.contains(c)))
            .ok_or(HighlightError::SentinelCollision)?;
        if chosen > 0 {
            log::debug!("input collides with sentinel alphabet(s), using alternate #{chosen}");
        }
        Ok(SENTINEL_ALPHABETS[chosen])
    }
}

/// Output of the shield stage
#[derive(Debug, Clone)]
pub struct Shielded {
    /// Escaped text with every literal replaced by its sentinel
    pub text: String,
    /// Shielded literals in discovery order
    pub regions: Vec<LiteralRegion>,
    /// Byte ranges of the sentinels within `text`
    pub sentinels: Vec<Range<usize>>,
    pub alphabet: SentinelAlphabet,
}

/// Lift literal regions out of escaped text
///
/// All literal rules sweep the text together from left to right. At each
/// step the earliest match wins; among matches starting at the same byte
/// the longest wins, and a comment beats a string of equal length. No
/// literal starts or ends inside an entity emitted by the escaper.
pub fn shield(escaped: &str, profile: &LanguageProfile) -> Result<Shielded> {
    let alphabet = SentinelAlphabet::select(escaped)?;
    let rules = profile.literal_rules();
    let entities = entity_ranges(escaped);

    let mut next: Vec<Option<Match<'_>>> = rules
        .iter()
        .map(|r| find_literal(&r.regex, escaped, 0, &entities))
        .collect();
    let mut text = String::with_capacity(escaped.len());
    let mut regions = Vec::new();
    let mut sentinels = Vec::new();
    let mut pos = 0;

    loop {
        for (rule, slot) in rules.iter().zip(next.iter_mut()) {
            if matches!(slot, Some(m) if m.start() < pos) {
                *slot = find_literal(&rule.regex, escaped, pos, &entities);
            }
        }

        let best = next
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.map(|m| (i, m)))
            .filter(|(_, m)| !m.is_empty())
            .min_by(|(ia, a), (ib, b)| {
                a.start()
                    .cmp(&b.start())
                    .then(b.len().cmp(&a.len()))
                    .then(kind_rank(rules[*ia].kind).cmp(&kind_rank(rules[*ib].kind)))
            });

        let Some((rule_index, found)) = best else {
            break;
        };

        let index = regions.len();
        text.push_str(&escaped[pos..found.start()]);
        let sentinel = alphabet.sentinel(index);
        sentinels.push(text.len()..text.len() + sentinel.len());
        text.push_str(&sentinel);
        regions.push(LiteralRegion {
            index,
            raw_text: found.as_str().to_string(),
            kind: rules[rule_index].kind,
        });
        pos = found.end();
    }
    text.push_str(&escaped[pos..]);

    log::trace!("shielded {} literal region(s)", regions.len());

    Ok(Shielded {
        text,
        regions,
        sentinels,
        alphabet,
    })
}

/// Next match of `regex` at or after `from` that does not cut through an
/// escaper entity
///
/// A marker such as `;` also occurs as the last byte of `&lt;`; a match
/// starting there is retried after the entity.
fn find_literal<'t>(
    regex: &Regex,
    text: &'t str,
    mut from: usize,
    entities: &[Range<usize>],
) -> Option<Match<'t>> {
    loop {
        let found = regex.find_at(text, from)?;
        if let Some(entity) = entity_around(entities, found.start()) {
            from = entity.end;
        } else if entity_around(entities, found.end()).is_some() {
            let step = text[found.start()..].chars().next().map_or(1, char::len_utf8);
            from = found.start() + step;
        } else {
            return Some(found);
        }
    }
}

/// Entity strictly containing byte `at`, if any
fn entity_around(entities: &[Range<usize>], at: usize) -> Option<&Range<usize>> {
    let i = entities.partition_point(|e| e.end <= at);
    entities.get(i).filter(|e| e.start < at)
}

fn kind_rank(kind: LiteralKind) -> u8 {
    match kind {
        LiteralKind::Comment => 0,
        LiteralKind::String => 1,
    }
}
