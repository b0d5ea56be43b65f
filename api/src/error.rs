//! API client error types
//!
//! Non-2xx statuses are never errors here: they come back as an
//! [`ApiResponse`](crate::types::ApiResponse) for the caller to inspect.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Cannot build URL for path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Cannot read photo fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No auth key in response (status {status})")]
    MissingKey { status: u16 },

    #[error("Unexpected response body (status {status}): {message}")]
    UnexpectedBody { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
