//! Error types for the demo.

use masthead_core::ModelError;
use thiserror::Error;

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    /// A catalog operation failed unexpectedly.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// An expected rejection did not happen.
    #[error("check '{check}' failed: {message}")]
    CheckFailed { check: String, message: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn check_failed(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CheckFailed {
            check: check.into(),
            message: message.into(),
        }
    }
}
