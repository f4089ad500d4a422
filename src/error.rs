// Passkeep — Top-level error types
//
// Aggregates errors from the store and generator modules into a single
// error enum for the application boundary.

use thiserror::Error;

/// Top-level error type for all Passkeep operations.
#[derive(Debug, Error)]
pub enum PasskeepError {
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Generator error: {0}")]
    Generator(#[from] crate::generator::GeneratorError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PasskeepError>;
