//! Error handling for the apidox library.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias. It uses `thiserror`
//! for easy error handling and implements conversions from common error
//! types.

use thiserror::Error;

/// Result type for apidox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for apidox operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Imported document is not a Postman collection
    #[error("invalid collection format: {0}")]
    InvalidCollectionFormat(String),

    /// Request method outside the supported set
    #[error("unsupported request method: {0}")]
    UnsupportedMethod(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid-collection error
    pub fn invalid_collection<S: Into<String>>(msg: S) -> Self {
        Self::InvalidCollectionFormat(msg.into())
    }
}
