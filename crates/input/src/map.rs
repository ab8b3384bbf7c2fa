//! Key and mouse mapping from terminal events to game input.

use crate::types::{KeyInput, PointerButton};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton};

/// Map a key event to game input. Releases and auto-repeats are ignored.
pub fn key_input(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(KeyInput::Escape),
        KeyCode::Modifier(_) | KeyCode::CapsLock | KeyCode::NumLock | KeyCode::ScrollLock => {
            Some(KeyInput::Modifier)
        }
        _ => Some(KeyInput::Other),
    }
}

/// Raw mode swallows SIGINT, so Ctrl+C arrives as a key and acts as the quit signal.
pub fn is_quit_chord(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}
