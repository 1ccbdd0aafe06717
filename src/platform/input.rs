//! Keyboard mapping
//!
//! Arrow keys and W/S steer; Space and Enter are the start hotkey.

use crate::sim::{Direction, InputEvent};

/// Whether a key went down or up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

fn direction_for(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        _ => None,
    }
}

/// Map a `KeyboardEvent.key` value to a simulation event
pub fn map_key(key: &str, phase: KeyPhase) -> Option<InputEvent> {
    if let Some(dir) = direction_for(key) {
        return Some(match phase {
            KeyPhase::Down => InputEvent::Pressed(dir),
            KeyPhase::Up => InputEvent::Released(dir),
        });
    }
    match (key, phase) {
        (" " | "Enter", KeyPhase::Down) => Some(InputEvent::StartRequested),
        _ => None,
    }
}
