//! System clipboard access for the copy-transcript action.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Place text on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;
    Ok(())
}
