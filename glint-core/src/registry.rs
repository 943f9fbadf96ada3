//! Profile registry
//!
//! The registry is owned by the hosting application and filled once at
//! startup. Lookups are by key; a profile registers under its code and,
//! optionally, its aliases.

use crate::error::{HighlightError, Result};
use crate::markup::Token;
use crate::pipeline::Highlighter;
use crate::profile::{builtin_profiles, LanguageProfile};
use std::collections::HashMap;
use std::sync::Arc;

/// Keyed collection of language profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Arc<LanguageProfile>>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in profile under its code and aliases
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for profile in builtin_profiles()? {
            registry.register_with_aliases(profile)?;
        }
        Ok(registry)
    }

    /// Register `profile` under `key`
    ///
    /// Keys are case-insensitive. Registering an identical profile under a
    /// taken key is a no-op; a different profile is a conflict.
    pub fn register(&mut self, key: &str, profile: impl Into<Arc<LanguageProfile>>) -> Result<()> {
        let key = normalize_key(key);
        let profile = profile.into();
        if key.is_empty() {
            return Err(HighlightError::invalid_profile(profile.code(), "empty registry key"));
        }

        match self.profiles.get(&key) {
            Some(existing) if **existing == *profile => {
                log::debug!("profile '{key}' already registered, ignoring duplicate");
                Ok(())
            }
            Some(_) => Err(HighlightError::ProfileConflict(key)),
            None => {
                log::debug!("registered profile '{}' as '{key}'", profile.code());
                self.profiles.insert(key, profile);
                Ok(())
            }
        }
    }

    /// Register `profile` under its code and every alias
    pub fn register_with_aliases(&mut self, profile: LanguageProfile) -> Result<()> {
        let profile = Arc::new(profile);
        let mut keys = vec![profile.code().to_string()];
        keys.extend(profile.aliases().iter().cloned());

        // Check every key first so a conflict leaves the registry untouched
        for key in &keys {
            if let Some(existing) = self.profiles.get(&normalize_key(key)) {
                if **existing != *profile {
                    return Err(HighlightError::ProfileConflict(normalize_key(key)));
                }
            }
        }
        for key in &keys {
            self.register(key, Arc::clone(&profile))?;
        }
        Ok(())
    }

    /// Look up a profile
    pub fn get(&self, key: &str) -> Result<&LanguageProfile> {
        self.profiles
            .get(&normalize_key(key))
            .map(Arc::as_ref)
            .ok_or_else(|| HighlightError::UnknownProfile(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.profiles.contains_key(&normalize_key(key))
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Distinct profiles, sorted by code
    pub fn profiles(&self) -> Vec<&LanguageProfile> {
        let mut seen: Vec<&LanguageProfile> = Vec::new();
        for profile in self.profiles.values() {
            if !seen.iter().any(|p| p.code() == profile.code()) {
                seen.push(profile);
            }
        }
        seen.sort_by(|a, b| a.code().cmp(b.code()));
        seen
    }

    /// Highlight `source` with the profile registered under `key`
    pub fn highlight(&self, source: &str, key: &str) -> Result<String> {
        Highlighter::new(self.get(key)?).highlight(source)
    }

    /// Classified tokens of `source` under the profile registered as `key`
    pub fn tokens(&self, source: &str, key: &str) -> Result<Vec<Token>> {
        Highlighter::new(self.get(key)?).tokens(source)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::builtin_profile;

    #[test]
    fn test_builtin_keys() {
        let registry = ProfileRegistry::builtin().unwrap();
        assert_eq!(
            registry.keys(),
            vec!["c-like", "java", "java-like", "py", "python", "python-like"]
        );
        assert_eq!(registry.profiles().len(), 2);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = ProfileRegistry::builtin().unwrap();
        assert_eq!(registry.get(" Java ").unwrap().code(), "java");
        assert_eq!(registry.get("PY").unwrap().code(), "python");
    }

    #[test]
    fn test_unknown_key() {
        let registry = ProfileRegistry::builtin().unwrap();
        let err = registry.highlight("x", "cobol").unwrap_err();
        assert_eq!(err, HighlightError::UnknownProfile("cobol".to_string()));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_register_same_profile_twice_is_noop() {
        let mut registry = ProfileRegistry::new();
        registry.register("java", builtin_profile("java").unwrap()).unwrap();
        registry.register("java", builtin_profile("java").unwrap()).unwrap();
        assert_eq!(registry.keys(), vec!["java"]);
    }

    #[test]
    fn test_register_different_profile_conflicts() {
        let mut registry = ProfileRegistry::new();
        registry.register("code", builtin_profile("java").unwrap()).unwrap();
        let err = registry
            .register("CODE", builtin_profile("python").unwrap())
            .unwrap_err();
        assert_eq!(err, HighlightError::ProfileConflict("code".to_string()));
        assert_eq!(registry.get("code").unwrap().code(), "java");
    }

    #[test]
    fn test_alias_conflict_leaves_registry_untouched() {
        let mut registry = ProfileRegistry::new();
        registry.register("py", builtin_profile("java").unwrap()).unwrap();

        let result = registry.register_with_aliases(builtin_profile("python").unwrap());
        assert!(matches!(result, Err(HighlightError::ProfileConflict(_))));
        assert!(!registry.contains("python"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut registry = ProfileRegistry::new();
        assert!(registry.register("  ", builtin_profile("java").unwrap()).is_err());
    }
}
