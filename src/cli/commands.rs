// Passkeep — CLI Command Handlers
//
// Each function handles one CLI subcommand. The store and clipboard are built
// once in `execute` and handed to every handler; handlers read confirmations
// from `input` and write all user-facing output to `out`.

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::{PasskeepError, Result};
use crate::generator::{self, PasswordPolicy};
use crate::store::{CredentialStore, JsonFileStore, StoreError};

use super::{Cli, Commands, PolicyArgs};

/// Execute the parsed CLI against the configured data file, using stdin/stdout.
pub fn execute(cli: Cli) -> Result<()> {
    let store = JsonFileStore::new(cli.file);
    tracing::debug!(path = %store.path().display(), "Using data file");

    let mut clipboard = SystemClipboard::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        cli.command,
        &store,
        &mut clipboard,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Dispatch one command against an injected store and clipboard.
pub fn run<S, C, I, O>(
    command: Commands,
    store: &S,
    clipboard: &mut C,
    input: &mut I,
    out: &mut O,
) -> Result<()>
where
    S: CredentialStore + ?Sized,
    C: Clipboard + ?Sized,
    I: BufRead,
    O: Write,
{
    match command {
        Commands::Add {
            website,
            email,
            password,
            generate,
            yes,
            copy,
            policy,
        } => {
            let password = if generate {
                generator::generate(&policy.to_policy())?
            } else {
                Zeroizing::new(password.unwrap_or_default())
            };
            let entry = Entry {
                website: website.trim(),
                email: email.trim(),
                password: password.trim(),
                generated: generate,
            };
            let saved = cmd_add(store, input, out, &entry, yes)?;
            if saved && copy {
                copy_password(clipboard, out, entry.password)?;
            }
            Ok(())
        }
        Commands::Find { website, copy } => {
            if let Some(password) = cmd_find(store, out, &website)? {
                if copy {
                    copy_password(clipboard, out, &password)?;
                }
            }
            Ok(())
        }
        Commands::List => cmd_list(store, out),
        Commands::Generate { copy, policy } => {
            let password = cmd_generate(out, &policy)?;
            if copy {
                copy_password(clipboard, out, &password)?;
            }
            Ok(())
        }
    }
}

impl PolicyArgs {
    /// Apply the overrides on top of the default policy.
    pub fn to_policy(&self) -> PasswordPolicy {
        let defaults = PasswordPolicy::default();
        PasswordPolicy {
            letters: self.letters.unwrap_or(defaults.letters),
            symbols: self.symbols.unwrap_or(defaults.symbols),
            digits: self.digits.unwrap_or(defaults.digits),
        }
    }
}

fn copy_password<C, O>(clipboard: &mut C, out: &mut O, password: &str) -> Result<()>
where
    C: Clipboard + ?Sized,
    O: Write,
{
    clipboard.copy_text(password)?;
    writeln!(out, "Password copied to clipboard.")?;
    Ok(())
}

// ─── Add ─────────────────────────────────────────────────────────────────────

/// Trimmed user input for one credential.
struct Entry<'a> {
    website: &'a str,
    email: &'a str,
    password: &'a str,
    generated: bool,
}

/// Website and password must be non-empty; the email may be blank.
fn validate_entry(entry: &Entry<'_>) -> Result<()> {
    if entry.website.is_empty() || entry.password.is_empty() {
        return Err(PasskeepError::Validation(
            "Please make sure you haven't left the website or password empty.".to_string(),
        ));
    }
    Ok(())
}

/// Returns whether the entry was saved (false when the user declined).
fn cmd_add<S, I, O>(
    store: &S,
    input: &mut I,
    out: &mut O,
    entry: &Entry<'_>,
    yes: bool,
) -> Result<bool>
where
    S: CredentialStore + ?Sized,
    I: BufRead,
    O: Write,
{
    validate_entry(entry)?;

    if !yes {
        writeln!(out, "These are the details entered for {}:", entry.website)?;
        writeln!(out, "  Email:    {}", entry.email)?;
        writeln!(out, "  Password: {}", entry.password)?;
        if !confirm(input, out, "Is it ok to save?")? {
            tracing::debug!(website = entry.website, "Save cancelled by user");
            writeln!(out, "Cancelled. Nothing was saved.")?;
            return Ok(false);
        }
    }

    store.upsert(entry.website, entry.email, entry.password)?;
    tracing::info!(website = entry.website, "Credentials saved");

    writeln!(out, "✓ Password saved for {}", entry.website)?;
    if entry.generated && yes {
        // Never shown otherwise, so print it once here.
        writeln!(out, "  Password: {}", entry.password)?;
    }

    Ok(true)
}

/// Ask a yes/no question. Only `y` or `yes` (any case) count as yes;
/// end of input counts as no.
fn confirm<I: BufRead, O: Write>(input: &mut I, out: &mut O, question: &str) -> Result<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

// ─── Find ────────────────────────────────────────────────────────────────────

/// Returns the password on a hit so the caller can copy it.
fn cmd_find<S, O>(store: &S, out: &mut O, website: &str) -> Result<Option<Zeroizing<String>>>
where
    S: CredentialStore + ?Sized,
    O: Write,
{
    let website = website.trim();
    if website.is_empty() {
        return Err(PasskeepError::Validation(
            "Please enter a website name to search.".to_string(),
        ));
    }

    match store.lookup(website) {
        Ok(record) => {
            writeln!(out, "{}", website)?;
            writeln!(out, "  Email:    {}", record.email)?;
            writeln!(out, "  Password: {}", record.password)?;
            Ok(Some(Zeroizing::new(record.password)))
        }
        Err(StoreError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "Lookup with no data file");
            writeln!(out, "No data file found.")?;
            Ok(None)
        }
        Err(StoreError::NotFoundInStore(website)) => {
            writeln!(out, "No details for '{}' exist.", website)?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

// ─── List ────────────────────────────────────────────────────────────────────

fn cmd_list<S, O>(store: &S, out: &mut O) -> Result<()>
where
    S: CredentialStore + ?Sized,
    O: Write,
{
    let document = match store.load_all() {
        Ok(document) => document,
        Err(StoreError::NotFound(_)) => {
            writeln!(out, "No data file found.")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if document.is_empty() {
        writeln!(out, "No passwords saved yet.")?;
        return Ok(());
    }

    writeln!(out, "Saved passwords ({}):\n", document.len())?;
    for (website, record) in &document {
        writeln!(out, "  Website:  {}", website)?;
        writeln!(out, "  Email:    {}", record.email)?;
        writeln!(out, "  Password: {}", record.password)?;
        writeln!(out, "{:-<40}", "")?;
    }

    Ok(())
}

// ─── Generate ────────────────────────────────────────────────────────────────

fn cmd_generate<O: Write>(out: &mut O, policy: &PolicyArgs) -> Result<Zeroizing<String>> {
    let password = generator::generate(&policy.to_policy())?;
    writeln!(out, "{}", password.as_str())?;
    Ok(password)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
