//! Language profiles
//!
//! A profile is the declarative bundle of literal markers, token patterns
//! and word sets that parameterizes the otherwise language-agnostic
//! pipeline. Profiles are built from a [`ProfileConfig`] and are immutable
//! afterwards.

pub mod config;
pub(crate) mod loader;

pub use config::{BlockComment, Literals, Metadata, Patterns, ProfileConfig, WordSet};
pub use loader::{builtin_profile, builtin_profiles, BUILTIN_CODES};

use crate::category::Category;
use crate::error::{HighlightError, Result};
use crate::escape::escape_markup;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// Kind of a shielded literal region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Comment,
}

impl LiteralKind {
    /// Category used when the region is restored
    pub fn category(&self) -> Category {
        match self {
            LiteralKind::String => Category::String,
            LiteralKind::Comment => Category::Comment,
        }
    }
}

/// Compiled literal matcher
#[derive(Debug, Clone)]
pub(crate) struct LiteralRule {
    pub kind: LiteralKind,
    pub regex: Regex,
}

/// Compiled classifier pass
#[derive(Debug, Clone)]
pub(crate) struct TokenPass {
    pub category: Category,
    pub regex: Regex,
    /// Span texts this pass must leave alone
    pub excluded: HashSet<String>,
}

/// Compiled language profile
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    config: ProfileConfig,
    literals: Vec<LiteralRule>,
    passes: Vec<TokenPass>,
}

impl LanguageProfile {
    /// Validate and compile a configuration
    pub fn from_config(config: ProfileConfig) -> Result<Self> {
        config.validate()?;
        let code = config.metadata.code.clone();

        // Comment rules come first so they win ties against quotes
        let mut literals = Vec::new();
        if let Some(marker) = &config.literals.line_comment {
            literals.push(LiteralRule {
                kind: LiteralKind::Comment,
                regex: compile(&code, &format!(r"{}[^\n]*", escaped_marker(marker)))?,
            });
        }
        if let Some(block) = &config.literals.block_comment {
            literals.push(LiteralRule {
                kind: LiteralKind::Comment,
                regex: compile(
                    &code,
                    &format!(
                        r"{}(?:[^&]|{ENTITY})*?{}",
                        escaped_marker(&block.open),
                        escaped_marker(&block.close)
                    ),
                )?,
            });
        }
        for &quote in &config.literals.quotes {
            let q = regex::escape(&quote.to_string());
            literals.push(LiteralRule {
                kind: LiteralKind::String,
                regex: compile(&code, &format!(r"{q}(?:[^{q}\n&]|{ENTITY})*{q}"))?,
            });
        }

        let patterns = &config.patterns;
        let keywords: HashSet<String> = config.keywords.words.iter().cloned().collect();

        let mut passes = vec![
            TokenPass {
                category: Category::Annotation,
                regex: compile(&code, &patterns.annotation)?,
                excluded: HashSet::new(),
            },
            TokenPass {
                category: Category::Function,
                regex: compile(&code, &patterns.function_call)?,
                excluded: if patterns.calls_exclude_keywords {
                    keywords
                } else {
                    HashSet::new()
                },
            },
        ];
        if let Some(regex) = word_set_regex(&code, &config.keywords)? {
            passes.push(TokenPass {
                category: Category::Keyword,
                regex,
                excluded: HashSet::new(),
            });
        }
        if let Some(regex) = word_set_regex(&code, &config.builtins)? {
            passes.push(TokenPass {
                category: Category::Builtin,
                regex,
                excluded: HashSet::new(),
            });
        }
        if let Some(type_name) = &patterns.type_name {
            passes.push(TokenPass {
                category: Category::Type,
                regex: compile(&code, type_name)?,
                excluded: HashSet::new(),
            });
        }
        passes.push(TokenPass {
            category: Category::Number,
            regex: compile(&code, &patterns.number)?,
            excluded: HashSet::new(),
        });

        Ok(Self {
            config,
            literals,
            passes,
        })
    }

    /// Parse and compile a profile from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_config(ProfileConfig::from_toml_str(content)?)
    }

    /// Load and compile a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_config(ProfileConfig::from_file(path)?)
    }

    pub fn code(&self) -> &str {
        &self.config.metadata.code
    }

    pub fn name(&self) -> &str {
        &self.config.metadata.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.config.metadata.aliases
    }

    /// The configuration this profile was compiled from
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Whether the type-name heuristic pass is enabled
    pub fn has_type_heuristic(&self) -> bool {
        self.config.patterns.type_name.is_some()
    }

    pub(crate) fn literal_rules(&self) -> &[LiteralRule] {
        &self.literals
    }

    pub(crate) fn passes(&self) -> &[TokenPass] {
        &self.passes
    }
}

/// Profiles are equal when compiled from equal configurations
impl PartialEq for LanguageProfile {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Eq for LanguageProfile {}

/// One escaper entity; literal bodies consume entities whole so a close
/// marker or quote can never match inside one
const ENTITY: &str = "&(?:amp|lt|gt);";

fn escaped_marker(marker: &str) -> String {
    regex::escape(&escape_markup(marker))
}

fn compile(code: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| HighlightError::invalid_profile(code, format!("bad pattern {pattern:?}: {e}")))
}

/// Word-boundary alternation over a word set, longest words first
fn word_set_regex(code: &str, set: &WordSet) -> Result<Option<Regex>> {
    if set.words.is_empty() {
        return Ok(None);
    }
    let mut words: Vec<&str> = set.words.iter().map(String::as_str).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    compile(code, &format!(r"\b(?:{alternation})\b")).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(extra: &str) -> Result<LanguageProfile> {
        LanguageProfile::from_toml_str(&format!(
            r#"
            [metadata]
            code = "test"
            name = "Test"

            [literals]
            quotes = ['"']
            line_comment = "//"
            block_comment = {{ open = "<!--", close = "-->" }}

            {extra}
            "#
        ))
    }

    #[test]
    fn test_pass_order() {
        let profile = profile(
            r#"
            [patterns]
            type_name = '\b[A-Z]\w*\b'

            [keywords]
            words = ["if"]

            [builtins]
            words = ["int"]
            "#,
        )
        .unwrap();

        let order: Vec<Category> = profile.passes().iter().map(|p| p.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Annotation,
                Category::Function,
                Category::Keyword,
                Category::Builtin,
                Category::Type,
                Category::Number,
            ]
        );
    }

    #[test]
    fn test_empty_sets_and_heuristic_skipped() {
        let profile = profile("").unwrap();
        let order: Vec<Category> = profile.passes().iter().map(|p| p.category).collect();
        assert_eq!(
            order,
            vec![Category::Annotation, Category::Function, Category::Number]
        );
        assert!(!profile.has_type_heuristic());
    }

    #[test]
    fn test_literal_rules_match_escaped_markers() {
        let profile = profile("").unwrap();
        let block = &profile.literal_rules()[1];
        assert_eq!(block.kind, LiteralKind::Comment);
        assert!(block.regex.is_match("&lt;!-- note --&gt;"));
        assert!(!block.regex.is_match("<!-- note -->"));
    }

    #[test]
    fn test_string_rule_is_line_bounded() {
        let profile = profile("").unwrap();
        let string = &profile.literal_rules()[2];
        assert_eq!(string.kind, LiteralKind::String);
        assert!(!string.regex.is_match("\"open\nclose\""));
        assert_eq!(
            string.regex.find("say \"hi\" \"there\"").map(|m| m.as_str()),
            Some("\"hi\"")
        );
    }

    #[test]
    fn test_word_set_prefers_whole_words() {
        let profile = profile("[builtins]\nwords = [\"in\", \"int\"]").unwrap();
        let builtin = &profile.passes()[2];
        let found: Vec<&str> = builtin
            .regex
            .find_iter("int interval in")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["int", "in"]);
    }

    #[test]
    fn test_invalid_regex_is_configuration_error() {
        let err = profile("[patterns]\nnumber = '([0-9'").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("bad pattern"));
    }

    #[test]
    fn test_keyword_exclusion_from_calls() {
        let profile = profile(
            r#"
            [patterns]
            calls_exclude_keywords = true

            [keywords]
            words = ["if", "while"]
            "#,
        )
        .unwrap();
        let calls = &profile.passes()[1];
        assert!(calls.excluded.contains("if"));
        assert!(calls.excluded.contains("while"));
    }

    #[test]
    fn test_equality_follows_config() {
        let a = profile("").unwrap();
        let b = profile("").unwrap();
        let c = profile("[keywords]\nwords = [\"fn\"]").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
