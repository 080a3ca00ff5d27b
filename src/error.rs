//! Common error types used throughout the crate.

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type covering failures across tritvec data structures.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument violated preconditions.
    #[error("{0}")]
    InvalidArgument(String),

    /// Deserialized input was malformed or inconsistent.
    #[error("{0}")]
    InvalidMetadata(String),

    /// Wrapper around [`std::io::Error`] values.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::InvalidMetadata`] with the provided message.
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }
}
