//! Tester error types

use std::path::PathBuf;
use thiserror::Error;
use api::ApiError;
use shared::SharedError;

/// Result type for scenario and runner operations
pub type TesterResult<T> = Result<T, TesterError>;

#[derive(Error, Debug)]
pub enum TesterError {
    /// The backend is not in the state a scenario needs; no recovery is attempted
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Assertion failed: {message}")]
    Assertion { message: String },

    /// The response status differs from the documented one
    #[error("Assertion failed: expected status {expected}, got {actual} (body: {body})")]
    UnexpectedStatus { expected: u16, actual: u16, body: String },

    #[error("Unknown test scenario: '{name}'. Available: {available}")]
    UnknownScenario { name: String, available: String },

    #[error("Fixture not found: {}", path.display())]
    FixtureMissing { path: PathBuf },

    #[error("Suite timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("API client error: {0}")]
    Api(#[from] ApiError),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl TesterError {
    pub fn assertion<S: Into<String>>(message: S) -> Self {
        TesterError::Assertion {
            message: message.into(),
        }
    }
}
