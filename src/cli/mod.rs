// Passkeep — CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: add, find, list, generate. `--copy` puts the password on the clipboard.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generator::CountRange;
use crate::store::DEFAULT_DATA_FILE;

pub use commands::{execute, run};

/// Passkeep — a simple password manager backed by a JSON file.
#[derive(Parser, Debug)]
#[command(name = "passkeep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the credential data file.
    #[arg(long, global = true, env = "PASSKEEP_FILE", default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save (or replace) the credentials for a website.
    Add {
        /// The website the credentials belong to (e.g., "github.com").
        #[arg(long)]
        website: String,

        /// The email or username for the website.
        #[arg(long, default_value = "")]
        email: String,

        /// The password to store.
        /// For real use, prefer --generate to avoid shell history exposure.
        #[arg(long, required_unless_present = "generate", conflicts_with = "generate")]
        password: Option<String>,

        /// Generate a random password instead of supplying one.
        #[arg(long)]
        generate: bool,

        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,

        /// Copy the saved password to the clipboard.
        #[arg(long, short = 'c')]
        copy: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Show the stored email and password for a website.
    Find {
        /// The website to look up (exact match).
        website: String,

        /// Copy the password to the clipboard.
        #[arg(long, short = 'c')]
        copy: bool,
    },

    /// List every stored website with its credentials.
    List,

    /// Print a freshly generated password without storing it.
    Generate {
        /// Copy the password to the clipboard.
        #[arg(long, short = 'c')]
        copy: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },
}

/// Overrides for the password generator, each as `N` or `MIN-MAX`.
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Number of letters (default 8-10).
    #[arg(long)]
    pub letters: Option<CountRange>,

    /// Number of symbols (default 2-4).
    #[arg(long)]
    pub symbols: Option<CountRange>,

    /// Number of digits (default 2-4).
    #[arg(long)]
    pub digits: Option<CountRange>,
}
