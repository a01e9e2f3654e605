//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by checkpointing, vocabulary persistence, and plotting.
#[derive(Debug, Error)]
pub enum Error {
    /// File or directory operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Loss-curve rendering failed.
    #[error("plot error: {0}")]
    Plot(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
