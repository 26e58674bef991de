//! Clipboard sink abstraction and the system-backed implementation.

use thiserror::Error;

/// Errors from the clipboard export action.
///
/// All variants are recoverable: a failed copy is logged and the
/// confirmation simply never shows.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The system clipboard could not be opened.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The write was rejected by the clipboard.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for the exported check-in text.
///
/// Injected into the copy action so callers can substitute a test sink
/// and observe writes without touching the real clipboard.
pub trait ClipboardSink {
    /// Write `text` to the sink.
    fn write_text(&mut self, text: &str) -> Result<(), CopyError>;
}

/// System clipboard backed by `arboard`.
///
/// The underlying handle is opened per write; holding it for the
/// process lifetime keeps clipboard ownership on some platforms.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a new system clipboard sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CopyError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CopyError::Write(e.to_string()))
    }
}
