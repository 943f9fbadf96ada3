//! Token categories produced by the highlighter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic category of a highlighted span
///
/// The declaration order of the classifier categories (`Annotation`
/// through `Number`) is their precedence order: an earlier category wins
/// whenever two passes could claim the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Decorator-like markers such as `@Override`
    Annotation,
    /// Identifier immediately followed by `(`
    Function,
    /// Reserved word from the profile's keyword set
    Keyword,
    /// Primitive type, built-in constant or well-known library name
    Builtin,
    /// Capitalized identifier (heuristic)
    Type,
    /// Decimal digit run
    Number,
    /// Shielded string or char literal
    String,
    /// Shielded line or block comment
    Comment,
}

impl Category {
    /// Every category, in precedence order followed by the literal kinds
    pub const ALL: [Category; 8] = [
        Category::Annotation,
        Category::Function,
        Category::Keyword,
        Category::Builtin,
        Category::Type,
        Category::Number,
        Category::String,
        Category::Comment,
    ];

    /// Stable lowercase name, used in markers and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Category::Annotation => "annotation",
            Category::Function => "function",
            Category::Keyword => "keyword",
            Category::Builtin => "builtin",
            Category::Type => "type",
            Category::Number => "number",
            Category::String => "string",
            Category::Comment => "comment",
        }
    }

    /// Inverse of [`Category::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("operator"), None);
    }

    #[test]
    fn test_precedence_order() {
        assert!(Category::Annotation < Category::Function);
        assert!(Category::Function < Category::Keyword);
        assert!(Category::Keyword < Category::Builtin);
        assert!(Category::Builtin < Category::Type);
        assert!(Category::Type < Category::Number);
    }

    #[test]
    fn test_names_have_no_digits_or_uppercase() {
        // Marker syntax must stay invisible to identifier-like patterns
        for category in Category::ALL {
            assert!(category
                .name()
                .chars()
                .all(|c| c.is_ascii_lowercase()));
        }
    }
}
