//! Error types for profile configuration and the highlighting pipeline

use thiserror::Error;

/// Errors raised by profile loading, registration and highlighting
///
/// Variants fall into two groups. Configuration errors are caused by the
/// caller (an unknown profile key, a malformed profile) and are meant to be
/// surfaced. Internal errors signal a broken pipeline invariant and should
/// never be reached in correct operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    /// No profile registered under the requested key
    #[error("unknown language profile: {0}")]
    UnknownProfile(String),

    /// A different profile is already registered under this key
    #[error("profile key '{0}' is already registered with a different profile")]
    ProfileConflict(String),

    /// Profile failed validation
    #[error("invalid profile '{code}': {reason}")]
    InvalidProfile {
        /// Profile code (or key) being validated
        code: String,
        /// Why validation failed
        reason: String,
    },

    /// Profile TOML could not be parsed
    #[error("failed to parse profile configuration: {0}")]
    ProfileParse(String),

    /// Profile file could not be read
    #[error("failed to read profile configuration {path}: {reason}")]
    Io {
        /// Path of the profile file
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// Every sentinel alphabet already occurs in the input
    #[error("internal invariant violated: no collision-free sentinel alphabet for this input")]
    SentinelCollision,

    /// Shield/restore bookkeeping went wrong
    #[error("internal invariant violated: {0}")]
    Integrity(String),
}

impl HighlightError {
    /// True for errors caused by configuration the caller supplied
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HighlightError::UnknownProfile(_)
                | HighlightError::ProfileConflict(_)
                | HighlightError::InvalidProfile { .. }
                | HighlightError::ProfileParse(_)
                | HighlightError::Io { .. }
        )
    }

    /// True for pipeline invariant violations
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            HighlightError::SentinelCollision | HighlightError::Integrity(_)
        )
    }

    pub(crate) fn invalid_profile(code: &str, reason: impl Into<String>) -> Self {
        HighlightError::InvalidProfile {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for glint operations
pub type Result<T> = std::result::Result<T, HighlightError>;
