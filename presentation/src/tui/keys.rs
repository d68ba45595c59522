//! Key mapping
//!
//! Translates crossterm key events into semantic [`KeyAction`]s. There is a
//! single editing mode: typing always goes to the question.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,

    // Text editing
    InsertChar(char),
    InsertNewline,
    DeleteChar,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Session
    Submit,
    Clear,
    Abandon,

    // Results scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    Quit,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => KeyAction::Clear,
        (KeyCode::Char('j'), KeyModifiers::CONTROL) => KeyAction::InsertNewline,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => KeyAction::CursorHome,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => KeyAction::CursorEnd,

        (KeyCode::Enter, m) if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::SHIFT) => {
            KeyAction::InsertNewline
        }
        (KeyCode::Enter, _) => KeyAction::Submit,
        (KeyCode::Esc, _) => KeyAction::Abandon,

        (KeyCode::Backspace, _) => KeyAction::DeleteChar,
        (KeyCode::Delete, _) => KeyAction::DeleteForward,
        (KeyCode::Left, _) => KeyAction::CursorLeft,
        (KeyCode::Right, _) => KeyAction::CursorRight,
        (KeyCode::Home, _) => KeyAction::CursorHome,
        (KeyCode::End, _) => KeyAction::CursorEnd,

        (KeyCode::Up, _) => KeyAction::ScrollUp,
        (KeyCode::Down, _) => KeyAction::ScrollDown,
        (KeyCode::PageUp, _) => KeyAction::PageUp,
        (KeyCode::PageDown, _) => KeyAction::PageDown,

        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            KeyAction::InsertChar(c)
        }
        (KeyCode::Tab, _) => KeyAction::InsertChar('\t'),

        _ => KeyAction::None,
    }
}
