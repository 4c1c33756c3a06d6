//! Error types shared by the model and storage layers
//!
//! Lookups that match nothing are not errors: they surface as `Option::None`.
//! Everything here is either rejected input or a failing store.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Input that cannot be applied (e.g. an update with no periods left after trimming)
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The document store could not serve the request
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// I/O error from a file-backed store
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document could not be encoded or decoded
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Persisted data is unreadable
    #[error("corruption: {0}")]
    Corruption(String),
}

impl Error {
    /// True for every failure that originates in the store rather than the input
    pub fn is_store_failure(&self) -> bool {
        !matches!(self, Error::MalformedInput(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
