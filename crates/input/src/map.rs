//! Key and mouse mapping from terminal events to UI actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorLeft,
    CursorRight,
    /// Jump the cursor to a slot (keys 1-9, 0 for the tenth).
    CursorTo(usize),
    /// Pick up / drop (drag mode) or select (click mode) at the cursor.
    Activate,
    /// Drop whatever is held or selected.
    Cancel,
    Check,
    GiveUp,
    /// Start the next round with the chosen item count.
    PlayAgain,
    IncreaseItems,
    DecreaseItems,
    ToggleOutlines,
    ToggleGestureMode,
    /// Dismiss the result overlay to look at the revealed board.
    Spectate,
}

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiAction::CursorRight)
        }
        KeyCode::Char(c @ '1'..='9') => Some(UiAction::CursorTo(c as usize - '1' as usize)),
        KeyCode::Char('0') => Some(UiAction::CursorTo(9)),

        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Activate),
        KeyCode::Esc => Some(UiAction::Cancel),

        KeyCode::Char('c') | KeyCode::Char('C') => Some(UiAction::Check),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(UiAction::GiveUp),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(UiAction::PlayAgain)
        }

        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(UiAction::IncreaseItems),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(UiAction::DecreaseItems),

        KeyCode::Char('b') | KeyCode::Char('B') => Some(UiAction::ToggleOutlines),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(UiAction::ToggleGestureMode),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::Spectate),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Left-button pointer gesture at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down { column: u16, row: u16 },
    Drag { column: u16, row: u16 },
    Up { column: u16, row: u16 },
}

/// Map mouse input to pointer gestures. Only the left button is used.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerAction> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Down { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerAction::Drag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Up { column, row }),
        _ => None,
    }
}
