//! Simulation module
//!
//! All gameplay logic lives here:
//! - Entities and session data are one owned aggregate, no globals
//! - Collision geometry comes from the logical model only
//! - Work is scheduled on a virtual clock with revocable task slots
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod game;
pub mod input;
pub mod scheduler;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, exited_near_edge, overlaps};
pub use difficulty::{Difficulty, tier_for_elapsed};
pub use game::Game;
pub use input::{Direction, InputEvent, InputState};
pub use scheduler::{Scheduler, TaskHandle, TaskKind};
pub use spawner::spawn_projectile;
pub use state::{
    EndReason, Emitter, GameEvent, GameState, Player, Projectile, ProjectileKind, SessionPhase,
};
pub use tick::{countdown_step, frame_step};
