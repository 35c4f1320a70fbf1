//! Error types for the feedback monitor
//!
//! This module provides error handling using thiserror for structured error
//! definitions and anyhow for error propagation at the binary boundary.

use crate::feedback::validator::ValidationFailure;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for feedback monitor operations
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// Submission failed one or more validation rules
    #[error("Invalid feedback data: {0}")]
    InvalidFeedback(#[from] ValidationFailure),

    /// Unknown feedback type used as a list filter
    #[error("Invalid feedback type: {0}")]
    InvalidFeedbackType(String),

    /// Request body was not valid JSON for the endpoint
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// Rewriting the backing store failed
    #[error("Failed to write feedback store {}: {source}", path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl FeedbackError {
    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FeedbackError::InvalidFeedback(_)
                | FeedbackError::InvalidFeedbackType(_)
                | FeedbackError::InvalidRequest(_)
        )
    }
}

/// Result type alias for feedback monitor operations
pub type Result<T> = std::result::Result<T, FeedbackError>;

/// Convert anyhow::Error to FeedbackError
impl From<anyhow::Error> for FeedbackError {
    fn from(err: anyhow::Error) -> Self {
        FeedbackError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedbackError::InvalidFeedback(ValidationFailure::DescriptionTooShort {
            min: 10,
            actual: 3,
        });
        assert_eq!(
            err.to_string(),
            "Invalid feedback data: description must be at least 10 characters (got 3)"
        );
    }

    #[test]
    fn test_client_error_classification() {
        let invalid: FeedbackError = ValidationFailure::MissingField("user_id").into();
        assert!(invalid.is_client_error());

        let write = FeedbackError::StoreWrite {
            path: PathBuf::from("feedback_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!write.is_client_error());
        assert!(write.to_string().contains("feedback_data.json"));
    }
}
