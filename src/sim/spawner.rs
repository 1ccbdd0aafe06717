//! Laser spawning
//!
//! One laser per spawn, from a ship chosen uniformly at random. The caller
//! reschedules the next spawn using the interval in effect at that moment.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Projectile};
use crate::consts::{PROJECTILE_HEIGHT, PROJECTILE_WIDTH};

/// Fire one laser from a random ship. Returns the new laser's index, or `None`
/// if the round is not running.
pub fn spawn_projectile<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<usize> {
    if !state.is_running() || state.emitters.is_empty() {
        return None;
    }

    let emitter = state.emitters[rng.random_range(0..state.emitters.len())];
    let anchor = emitter.anchor();
    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        x: anchor.x,
        y: anchor.y,
        speed: state.difficulty.projectile_speed,
        size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        kind: emitter.kind,
    });
    log::debug!("Spawned laser {} ({:?})", id, emitter.kind);
    Some(state.projectiles.len() - 1)
}
