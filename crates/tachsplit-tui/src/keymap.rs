//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    NextField,
    PrevField,
    Insert(char),
    Backspace,
    ClearField,
    Copy,
    None,
}

/// Map a key event to an action.
///
/// Readings hold digits and a decimal point, so plain letters are free
/// for shortcuts.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter | KeyCode::Char('y') => KeyAction::Copy,
        KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::ClearField,
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => KeyAction::Insert(c),
        _ => KeyAction::None,
    }
}
