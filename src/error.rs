//! Error handling for the snipgen library.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias. It uses `thiserror`
//! for easy error handling and implements conversions from common error
//! types.
//!
//! Note that the serialization engine itself is deliberately permissive:
//! invalid option values, malformed embedded JSON, and malformed formdata
//! file sources all fall back to safe defaults and are never surfaced here.
//! `Error` covers input loading and renderer lookup only.

use thiserror::Error;

/// Result type for snipgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for snipgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Unknown snippet target
    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    /// Request descriptor error
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Create a new invalid-request error
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRequest(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::InvalidRequest(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::InvalidRequest(s)
    }
}
