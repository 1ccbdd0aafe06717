//! Laser Dodge - a 2D arcade dodging game
//!
//! Core modules:
//! - `sim`: Simulation (session state machine, entities, collisions, scheduling)
//! - `view`: Snapshot handed to the render surface each frame
//! - `platform`: Browser input mapping
//! - `tuning`: Data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod backdrop;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod view;

pub use sim::{EndReason, Game, GameEvent, SessionPhase};
pub use tuning::{SpeedMode, Tuning, TuningError};
pub use view::RenderSnapshot;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (arena-local pixels, origin top-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 450.0;

    /// Hero box, pinned near the left edge
    pub const PLAYER_X: f32 = 24.0;
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;

    /// Laser box
    pub const PROJECTILE_WIDTH: f32 = 40.0;
    pub const PROJECTILE_HEIGHT: f32 = 6.0;
    /// Fastest a laser may move per frame: overlap is only tested after each
    /// move, so anything faster could jump clean over the hero
    pub const MAX_PROJECTILE_SPEED: f32 = PLAYER_WIDTH + PROJECTILE_WIDTH;

    /// Ship box, pinned near the right edge
    pub const SHIP_X: f32 = 720.0;
    pub const SHIP_WIDTH: f32 = 64.0;
    pub const SHIP_HEIGHT: f32 = 48.0;

    /// Frame task period (60 Hz display refresh)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Countdown task period
    pub const COUNTDOWN_MS: f64 = 1000.0;
    /// Largest wall-clock step the driver accepts per call (prevents spiral of death
    /// after a backgrounded tab resumes)
    pub const MAX_ADVANCE_MS: f64 = 100.0;
}
