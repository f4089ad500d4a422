// Passkeep — Generator error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid password policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid count range '{0}': expected N or MIN-MAX")]
    InvalidRange(String),
}
