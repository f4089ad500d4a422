// Passkeep — Clipboard access
//
// Copies a password to the system clipboard. The platform clipboard is opened
// lazily on the first copy, so commands run without `--copy` never touch it.
//
// NOTE: on X11/Wayland the copied text is served by this process, so it may
// vanish once passkeep exits unless a clipboard manager picks it up.

use crate::error::{PasskeepError, Result};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the system clipboard so handlers can be tested without one.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

// ─── Platform Implementation ─────────────────────────────────────────────────

/// Production implementation using the `arboard` crate.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                PasskeepError::Clipboard(format!("failed to open clipboard: {}", e))
            })?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| PasskeepError::Clipboard("clipboard not available".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| PasskeepError::Clipboard(format!("failed to copy to clipboard: {}", e)))?;
        tracing::debug!("Copied password to clipboard");
        Ok(())
    }
}

// ─── In-Memory Mock for Testing ──────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────
