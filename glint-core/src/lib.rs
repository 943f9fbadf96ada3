//! Profile-driven source code highlighting
//!
//! This crate turns a code snippet into escaped markup in which keywords,
//! built-ins, function calls, numbers, annotations, type names, strings
//! and comments are wrapped in style markers. It does not parse any
//! language: a [`LanguageProfile`] supplies the patterns and word sets,
//! and a fixed pipeline applies them.
//!
//! # Pipeline
//!
//! 1. **Escape** `&`, `<` and `>` so source text can never inject markup.
//! 2. **Shield** string literals and comments behind collision-free
//!    sentinels.
//! 3. **Classify** the remaining text with ordered passes: annotation,
//!    function call, keyword, builtin, type-name heuristic, number.
//! 4. **Restore** each literal, wrapped as a string or a comment.
//!
//! # Example
//!
//! ```rust
//! use glint_core::ProfileRegistry;
//!
//! let registry = ProfileRegistry::builtin().unwrap();
//! let html = registry.highlight("int total = 42;", "java").unwrap();
//!
//! assert_eq!(
//!     html,
//!     "<span class=\"hl-builtin\">int</span> total = <span class=\"hl-number\">42</span>;"
//! );
//! ```

pub mod category;
pub mod error;
pub mod escape;
pub mod markup;
pub mod pipeline;
pub mod profile;
pub mod registry;

pub use category::Category;
pub use error::{HighlightError, Result};
pub use escape::{escape_markup, unescape_markup};
pub use markup::{css_class, strip_markers, tokens, Token};
pub use pipeline::{Highlighter, LiteralRegion, StyledSpan};
pub use profile::{LanguageProfile, LiteralKind, ProfileConfig};
pub use registry::ProfileRegistry;

use std::sync::OnceLock;

static BUILTIN_REGISTRY: OnceLock<Result<ProfileRegistry>> = OnceLock::new();

/// Registry of the built-in profiles, compiled on first use
pub fn builtin_registry() -> Result<&'static ProfileRegistry> {
    BUILTIN_REGISTRY
        .get_or_init(ProfileRegistry::builtin)
        .as_ref()
        .map_err(|e| e.clone())
}

/// Highlight `source` with the built-in profile registered as `profile_key`
///
/// Hosts with their own profiles should build a [`ProfileRegistry`] and
/// call [`ProfileRegistry::highlight`] instead.
pub fn highlight(source: &str, profile_key: &str) -> Result<String> {
    builtin_registry()?.highlight(source, profile_key)
}
