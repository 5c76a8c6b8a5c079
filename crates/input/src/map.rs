//! Key mapping from terminal events to game intents.

use crate::types::{Direction, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game intents.
///
/// Directions are screen-relative; the controller applies the camera orbit.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(Intent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Intent::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Intent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(Intent::Move(Direction::Right))
        }

        // Camera
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('[') => Some(Intent::RotateCameraLeft),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char(']') => Some(Intent::RotateCameraRight),

        // Session
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
