//! Error types

use thiserror::Error;

/// Errors returned by the stream and file checks
#[derive(Error, Debug)]
pub enum PlaintextError {
    /// Open or read failure from the underlying source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preview limit is zero or too large to express in bytes
    #[error("invalid length: maxKB must be greater than 0 and fit in a byte count (got {max_kb})")]
    InvalidLength { max_kb: usize },
}

/// Result type for plaintext checks
pub type Result<T> = std::result::Result<T, PlaintextError>;
