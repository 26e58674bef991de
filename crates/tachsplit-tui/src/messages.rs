//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Tick event for periodic redraws (copy-confirmation expiry).
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Clipboard write finished on the copy thread: the copied text, or
    /// an error description.
    CopyFinished(Result<String, String>),
    /// Quit the application.
    Quit,
}
