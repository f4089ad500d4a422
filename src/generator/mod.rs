// Passkeep — Generator Module
//
// Random password generation from letters, digits and symbols. Uses the
// thread-local CSPRNG from `rand`; callers may pass their own RNG for testing.

mod error;
mod password;

pub use error::GeneratorError;
pub use password::{
    generate, generate_password, CountRange, PasswordPolicy, DIGITS, LETTERS, MAX_CLASS_COUNT,
    SYMBOLS,
};
