//! Asynchronous clipboard export.

use crossbeam_channel::Sender;

use tachsplit_core::{ClipboardSink, SystemClipboard};

use crate::messages::TuiMessage;

/// Write `text` to the system clipboard on a short-lived thread.
///
/// The outcome arrives back in the update loop as a
/// [`TuiMessage::CopyFinished`]. A dropped sender just means the TUI
/// already exited; the result is discarded.
pub fn spawn_copy(text: String, tx: Sender<TuiMessage>) {
    std::thread::spawn(move || {
        let mut sink = SystemClipboard::new();
        let result = sink
            .write_text(&text)
            .map(|()| text)
            .map_err(|e| e.to_string());
        let _ = tx.send(TuiMessage::CopyFinished(result));
    });
}
