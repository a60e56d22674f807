//! Keyboard shortcut and mouse handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Dashboard keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    /// Close the dialog if open, otherwise quit.
    Back,
    NextTab,
    PrevTab,
    SelectTab(usize),
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Activate,
    None,
}

/// Pointer input in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Move { column: u16, row: u16 },
    Click { column: u16, row: u16 },
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Back,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char(c @ '1'..='4') => KeyAction::SelectTab(c as usize - '1' as usize),
        KeyCode::Tab => KeyAction::NextTab,
        KeyCode::BackTab => KeyAction::PrevTab,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::Up => KeyAction::Up,
        KeyCode::Down => KeyAction::Down,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        _ => KeyAction::None,
    }
}

/// Map a mouse event to a pointer event. Only moves and left clicks count.
#[must_use]
pub fn map_mouse(event: MouseEvent) -> Option<PointerEvent> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            Some(PointerEvent::Move { column, row })
        }
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Click { column, row }),
        _ => None,
    }
}
