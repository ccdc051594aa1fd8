//! Error types for chunking operations

use thiserror::Error;
use wordchunk_core::CoreError;

/// Errors returned by [`Chunker`](crate::Chunker) construction and chunking
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Invalid window or overlap size
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Configuration source could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Input stream could not be fully read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cancellation was requested while reading input
    #[error("chunking cancelled")]
    Cancelled,

    /// Deadline passed while reading input
    #[error("chunking deadline exceeded")]
    DeadlineExceeded,
}

impl ChunkError {
    /// Whether the error came from the cancellation context
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ChunkError::Cancelled | ChunkError::DeadlineExceeded)
    }
}

impl From<CoreError> for ChunkError {
    fn from(err: CoreError) -> Self {
        ChunkError::Configuration(err.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<toml::de::Error> for ChunkError {
    fn from(err: toml::de::Error) -> Self {
        ChunkError::ConfigParse(err.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ChunkError {
    fn from(err: serde_json::Error) -> Self {
        ChunkError::ConfigParse(err.to_string())
    }
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;
