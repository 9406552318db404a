//! Error types for the configuration and template-function surfaces
//!
//! The sanitization pipeline itself never fails: every sanitizer returns a
//! `String`. Errors only arise when settings are parsed from text or when a
//! template engine resolves a function by name.

use thiserror::Error;

/// Errors raised while building settings or dispatching template functions
#[derive(Error, Debug)]
pub enum SanitizeError {
    /// Dialect name not recognised
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),
    /// Render context name not recognised
    #[error("unknown render context: {0}")]
    UnknownContext(String),
    /// Output format name not recognised
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    /// Template function name not registered
    #[error("unknown template function: {0}")]
    UnknownFunction(String),
    /// Template function invoked with the wrong number of arguments
    #[error("{function} expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        function: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Settings document could not be parsed
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] toml::de::Error),
}

impl SanitizeError {
    /// Get numeric error code, stable across releases
    pub fn code(&self) -> u32 {
        match self {
            SanitizeError::UnknownDialect(_) => 1,
            SanitizeError::UnknownContext(_) => 2,
            SanitizeError::UnknownFormat(_) => 3,
            SanitizeError::UnknownFunction(_) => 4,
            SanitizeError::ArgumentCount { .. } => 5,
            SanitizeError::InvalidSettings(_) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, SanitizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            SanitizeError::UnknownDialect("x".to_string()),
            SanitizeError::UnknownContext("x".to_string()),
            SanitizeError::UnknownFormat("x".to_string()),
            SanitizeError::UnknownFunction("x".to_string()),
            SanitizeError::ArgumentCount {
                function: "name",
                expected: 1,
                actual: 0,
            },
        ];
        let mut codes: Vec<u32> = errors.iter().map(SanitizeError::code).collect();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_argument_count_message() {
        let err = SanitizeError::ArgumentCount {
            function: "anchorNameMarkdown",
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "anchorNameMarkdown expects 2 argument(s), got 1"
        );
    }
}
