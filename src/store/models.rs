// Passkeep — Credential data models
//
// SECURITY: `password` is stored in plaintext in the data file, but it is never
// included in Debug output or log messages.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The full credential document, keyed by website.
/// Keys are case-sensitive and stored exactly as given.
pub type CredentialDocument = BTreeMap<String, CredentialRecord>;

/// The (email, password) pair stored for one website.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Custom Debug implementation that NEVER reveals the password.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
