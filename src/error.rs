//! Error types for standup.
//!
//! Parsing itself never fails; these cover reading input, loading
//! configuration, and formatting output.

use thiserror::Error;

/// Errors produced outside the parser.
#[derive(Debug, Error)]
pub enum StandupError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configured indicator pattern is not a valid regex.
    #[error("Invalid indicator pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Strict mode found fields that were mentioned but not understood.
    #[error("Fields need review: {}", .0.join(", "))]
    NeedsReview(Vec<String>),
}

impl StandupError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NeedsReview(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_review_message() {
        let err = StandupError::NeedsReview(vec!["lp".to_string(), "jira".to_string()]);
        assert_eq!(err.to_string(), "Fields need review: lp, jira");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_message() {
        let err = StandupError::Config("bad yaml".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad yaml");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_from_io() {
        let err: StandupError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, StandupError::Io(_)));
    }
}
