//! Key handling
//!
//! Maps raw crossterm key events to chat actions. While an alert is open
//! only dismissal and quit get through.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the input (Enter)
    Submit,
    /// Insert a character into the input
    InsertChar(char),
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character under the cursor (Delete)
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Scroll history towards older messages
    ScrollUp,
    /// Scroll history towards newer messages
    ScrollDown,
    /// Close the alert overlay
    DismissAlert,
    /// Quit the application
    Quit,
    /// Key is ignored
    None,
}

/// Translate a key event, honouring the blocking alert.
pub fn map_key(key: KeyEvent, alert_open: bool) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => KeyAction::Quit,
            KeyCode::Char('a') if !alert_open => KeyAction::CursorHome,
            KeyCode::Char('e') if !alert_open => KeyAction::CursorEnd,
            _ => KeyAction::None,
        };
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => KeyAction::DismissAlert,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) => KeyAction::InsertChar(c),
        KeyCode::Backspace => KeyAction::DeleteBack,
        KeyCode::Delete => KeyAction::DeleteForward,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        KeyCode::Up | KeyCode::PageUp => KeyAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => KeyAction::ScrollDown,
        _ => KeyAction::None,
    }
}
