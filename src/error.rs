//! Unified error types for careerlog.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All careerlog errors.
///
/// Lookups that match nothing are not errors; they return `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before reaching the store
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The document store failed to serve the request
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Persisted data is unreadable
    #[error("storage error: {0}")]
    Storage(String),

    /// Settings could not be loaded or are invalid
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for careerlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the caller's input was rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedInput(_))
    }

    /// Check if the failure came from the store rather than the input.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            Error::StoreUnavailable(_) | Error::Io(_) | Error::Serialization(_) | Error::Storage(_)
        )
    }
}

// Convert from internal core errors
impl From<careerlog_core::Error> for Error {
    fn from(e: careerlog_core::Error) -> Self {
        use careerlog_core::Error as CoreError;
        match e {
            CoreError::MalformedInput(msg) => Error::MalformedInput(msg),
            CoreError::StoreUnavailable(msg) => Error::StoreUnavailable(msg),
            CoreError::IoError(io_err) => Error::Io(io_err),
            CoreError::SerializationError(msg) => Error::Serialization(msg),
            CoreError::Corruption(msg) => Error::Storage(format!("corruption: {}", msg)),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

// Convert from TOML settings errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
