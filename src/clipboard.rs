//! Clipboard access for copying hashes out of the dashboard.

use arboard::Clipboard;

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Open the system clipboard. Fails on headless sessions.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        self.clipboard.set_text(text.to_string())
    }
}
