//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// No profile registered under the requested language key
    UnknownLanguage(String),
    /// Highlighting error from core
    HighlightError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownLanguage(key) => write!(
                f,
                "Unknown language: {key} (see `glint list languages`)"
            ),
            CliError::HighlightError(msg) => write!(f, "Highlighting error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("Solution.java".to_string());
        assert_eq!(error.to_string(), "File not found: Solution.java");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_unknown_language_display() {
        let error = CliError::UnknownLanguage("cobol".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown language: cobol (see `glint list languages`)"
        );
    }

    #[test]
    fn test_highlight_error_display() {
        let error = CliError::HighlightError("sentinel mismatch".to_string());
        assert_eq!(error.to_string(), "Highlighting error: sentinel mismatch");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("x.py".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("x.py"));
    }
}
