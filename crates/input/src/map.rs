//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys move and descend, `s`/`f` rotate left/right, Up also rotates
/// right, Enter or Space starts a game and `p` pauses.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::Descend),

        // Rotation
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::RotateLeft),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Up => Some(GameAction::RotateRight),

        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
