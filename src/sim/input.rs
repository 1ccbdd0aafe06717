//! Held-direction input
//!
//! Decoupled from whatever produces the events; the browser driver maps key
//! names onto these in `platform::input`.

use serde::{Deserialize, Serialize};

/// Vertical direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Discrete events from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Direction),
    Released(Direction),
    /// Start button, click on the arena, or the start hotkey
    StartRequested,
    /// Reset button
    ResetRequested,
}

/// Which directions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Net vertical displacement for one frame: up first, then down, so holding
    /// both cancels out
    pub fn vertical_delta(&self, speed: f32) -> f32 {
        let mut dy = 0.0;
        if self.up {
            dy -= speed;
        }
        if self.down {
            dy += speed;
        }
        dy
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
