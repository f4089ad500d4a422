// Passkeep — Library root
//
// Re-exports the store, generator, clipboard, and CLI modules.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod generator;
pub mod store;

pub use error::{PasskeepError, Result};
