//! Built-in profiles embedded at compile time

use super::{LanguageProfile, ProfileConfig};
use crate::error::{HighlightError, Result};

macro_rules! embed_profile_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_PROFILES: [(&str, &str); 2] = [
    embed_profile_config!("java", "../../configs/profiles/java.toml"),
    embed_profile_config!("python", "../../configs/profiles/python.toml"),
];

/// Codes of the profiles shipped with the crate
pub const BUILTIN_CODES: [&str; 2] = ["java", "python"];

/// Compile one built-in profile by code
pub fn builtin_profile(code: &str) -> Result<LanguageProfile> {
    let (expected, content) = EMBEDDED_PROFILES
        .iter()
        .find(|(c, _)| *c == code)
        .ok_or_else(|| HighlightError::UnknownProfile(code.to_string()))?;

    let config = ProfileConfig::from_toml_str(content).map_err(|e| {
        HighlightError::ProfileParse(format!("built-in profile {expected}: {e}"))
    })?;

    // Validate that the config code matches
    if config.metadata.code != *expected {
        return Err(HighlightError::invalid_profile(
            expected,
            format!("code mismatch, got {}", config.metadata.code),
        ));
    }

    LanguageProfile::from_config(config)
}

/// Compile every built-in profile
pub fn builtin_profiles() -> Result<Vec<LanguageProfile>> {
    BUILTIN_CODES.iter().map(|code| builtin_profile(code)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_unsupported() {
        match builtin_profile("nonexistent") {
            Err(HighlightError::UnknownProfile(code)) => assert_eq!(code, "nonexistent"),
            other => panic!("Expected UnknownProfile error, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_java() {
        let profile = builtin_profile("java").expect("Java profile should exist");
        assert_eq!(profile.code(), "java");
        assert_eq!(profile.name(), "Java");
        assert!(profile.has_type_heuristic());
        assert!(profile.config().literals.block_comment.is_some());
    }

    #[test]
    fn test_builtin_python() {
        let profile = builtin_profile("python").expect("Python profile should exist");
        assert_eq!(profile.code(), "python");
        assert!(!profile.has_type_heuristic());
        assert_eq!(profile.config().literals.line_comment.as_deref(), Some("#"));
        assert!(profile.config().literals.block_comment.is_none());
    }

    #[test]
    fn test_builtin_profiles_all_compile() {
        let profiles = builtin_profiles().unwrap();
        let codes: Vec<&str> = profiles.iter().map(|p| p.code()).collect();
        assert_eq!(codes, BUILTIN_CODES);
    }
}
