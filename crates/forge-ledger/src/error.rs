//! Error types for ledger storage.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for storage operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised by durable storage backends.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Reading, writing or removing a stored value failed.
    #[error("storage i/o failed for {path}: {source}")]
    Io {
        /// The file backing the key.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A key contains characters that cannot be mapped to storage.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Stored data could not be encoded or decoded.
    #[error("malformed ledger data: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
