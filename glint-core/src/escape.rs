//! Markup escaping
//!
//! The escaper runs before any other stage so that the markers inserted
//! later are never escaped themselves.

use std::ops::Range;

/// Escape `&`, `<` and `>` in a single left-to-right scan
///
/// Every `&` in the result starts one of the three entities produced
/// here, which later stages rely on. The function is not meant to be
/// applied to its own output.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverse [`escape_markup`]
///
/// Only the three entities emitted by the escaper are recognized; any
/// other `&` sequence is kept verbatim.
pub fn unescape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let (decoded, consumed) = decode_entity(tail).unwrap_or(('&', 1));
        out.push(decoded);
        rest = &tail[consumed..];
    }
    out.push_str(rest);
    out
}

/// Byte ranges of the entities in escaped text, in order
pub(crate) fn entity_ranges(escaped: &str) -> Vec<Range<usize>> {
    escaped
        .match_indices('&')
        .filter_map(|(amp, _)| decode_entity(&escaped[amp..]).map(|(_, len)| amp..amp + len))
        .collect()
}

/// Decode one entity at the start of `text`, returning the character and
/// the number of bytes it occupied
pub(crate) fn decode_entity(text: &str) -> Option<(char, usize)> {
    if text.starts_with("&amp;") {
        Some(('&', 5))
    } else if text.starts_with("&lt;") {
        Some(('<', 4))
    } else if text.starts_with("&gt;") {
        Some(('>', 4))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_markup(""), "");
    }

    #[test]
    fn test_escape_generics() {
        assert_eq!(
            escape_markup("List<Map<K, V>> m;"),
            "List&lt;Map&lt;K, V&gt;&gt; m;"
        );
    }

    #[test]
    fn test_escape_ampersand_once() {
        // Source text that already looks like an entity is still escaped
        assert_eq!(escape_markup("a && b &amp;"), "a &amp;&amp; b &amp;amp;");
    }

    #[test]
    fn test_escape_leaves_quotes() {
        assert_eq!(escape_markup(r#"'x' "y""#), r#"'x' "y""#);
    }

    #[test]
    fn test_unescape_inverts_escape() {
        let source = "if (a < b && c > d) { s = \"&lt;\"; }";
        assert_eq!(unescape_markup(&escape_markup(source)), source);
    }

    #[test]
    fn test_entity_ranges() {
        let escaped = escape_markup("a<b && c;");
        assert_eq!(escaped, "a&lt;b &amp;&amp; c;");
        assert_eq!(entity_ranges(&escaped), vec![1..5, 7..12, 12..17]);
        assert!(entity_ranges("plain; text").is_empty());
    }

    #[test]
    fn test_unescape_keeps_unknown_entities() {
        assert_eq!(unescape_markup("&quot;&amp;"), "&quot;&");
    }
}
