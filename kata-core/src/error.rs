//! Structured error types shared by the kata crates.

use thiserror::Error;

/// Unified error type for all kata operations.
#[derive(Debug, Error)]
pub enum KataError {
    /// Invalid input (bad arguments, values outside the function's domain)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An index or length exceeding the bounds of the data it refers to
    #[error("out of range: {0}")]
    OutOfRange(String),
}

/// Convenience alias used throughout the kata crates.
pub type Result<T> = std::result::Result<T, KataError>;
