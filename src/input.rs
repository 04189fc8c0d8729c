use macroquad::input::{KeyCode, is_key_pressed};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Quit,
}

/// Arrow keys steer; Escape or Q leaves. Everything else is ignored.
pub fn map_key(key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::Up => Some(KeyAction::Turn(Direction::Up)),
        KeyCode::Down => Some(KeyAction::Turn(Direction::Down)),
        KeyCode::Left => Some(KeyAction::Turn(Direction::Left)),
        KeyCode::Right => Some(KeyAction::Turn(Direction::Right)),
        KeyCode::Escape | KeyCode::Q => Some(KeyAction::Quit),
        _ => None,
    }
}

const BOUND_KEYS: [KeyCode; 6] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Escape,
    KeyCode::Q,
];

/// Actions for keys that went down this frame, in a fixed key order
pub fn poll_actions() -> Vec<KeyAction> {
    BOUND_KEYS
        .into_iter()
        .filter(|key| is_key_pressed(*key))
        .filter_map(map_key)
        .collect()
}
