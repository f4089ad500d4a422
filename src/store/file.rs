// Passkeep — JSON data file access
//
// Reads and writes the whole credential document in one go. There are no
// partial writes and no temp-file rename: a crash mid-write can leave a
// truncated file, which the next read reports as corrupt.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::models::CredentialDocument;
use super::StoreError;

/// Default data file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Indentation used when writing the document.
const INDENT: &[u8] = b"    ";

/// Handle to the on-disk credential document.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full document.
    ///
    /// An absent file is `NotFound`; anything present that is not a JSON object
    /// of `{website: {email, password}}` is `CorruptData`.
    pub fn read(&self) -> Result<CredentialDocument, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::CorruptData {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with the given document.
    pub fn write(&self, document: &CredentialDocument) -> Result<(), StoreError> {
        let encoded = encode_document(document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

/// Pretty-print the document with four-space indentation.
fn encode_document(document: &CredentialDocument) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(StoreError::Serialize)?;
    Ok(buf)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
