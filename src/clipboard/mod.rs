//! Copy conversion results to the system clipboard.
//!
//! Results are short single lines, so anything empty or unexpectedly large is
//! refused before the clipboard is touched. Headless environments (CI, SSH
//! without a display) surface as an error instead of a panic.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Upper bound on copied text
const MAX_COPY_LEN: usize = 4096;

/// Destination for copied text
trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard(Clipboard);

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.0.set_text(text).context("Failed to set clipboard contents")
    }
}

fn check_copy_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Nothing to copy");
    }
    if text.len() > MAX_COPY_LEN {
        bail!("Refusing to copy {} bytes (limit {})", text.len(), MAX_COPY_LEN);
    }
    Ok(())
}

/// Validate `text`, then open a sink and write to it. Invalid text never
/// opens the sink.
fn copy_with<S, F>(text: &str, open: F) -> Result<()>
where
    S: ClipboardSink,
    F: FnOnce() -> Result<S>,
{
    check_copy_text(text)?;
    open()?.write_text(text)
}

/// Copy `text` to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_with(text, || {
        let clipboard = Clipboard::new().context("Clipboard unavailable")?;
        Ok(SystemClipboard(clipboard))
    })
}
