// Passkeep — Store error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist yet.
    #[error("No data file found at {}", .0.display())]
    NotFound(PathBuf),

    /// The backing file exists but is not a valid credential document.
    #[error("Data file {} is corrupted: {source}", .path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document loaded fine but has no entry for this website.
    #[error("No details for '{0}' exist")]
    NotFoundInStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode credential document: {0}")]
    Serialize(#[source] serde_json::Error),
}
