// Passkeep — Store Module
//
// File-backed credential storage: one pretty-printed JSON document mapping
// website → { email, password }. Secrets are stored in plaintext.

mod error;
mod file;
mod models;
mod repository;

pub use error::StoreError;
pub use file::{DataFile, DEFAULT_DATA_FILE};
pub use models::{CredentialDocument, CredentialRecord};
pub use repository::{CredentialStore, JsonFileStore};

#[cfg(test)]
pub use repository::mock;
