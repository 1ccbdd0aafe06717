//! Per-frame and per-second simulation steps
//!
//! Both steps only report that the round should end; the session machine in
//! `game` cancels pending work and performs the transition.

use super::collision::{exited_near_edge, overlaps};
use super::difficulty::Difficulty;
use super::input::InputState;
use super::state::{EndReason, GameEvent, GameState};
use crate::tuning::{SpeedMode, Tuning};

/// Advance one frame: move the hero, move every laser, resolve hits and dodges.
///
/// Order within a frame is fixed: input, then collision, then off-arena pruning.
/// The first hit is authoritative; lasers after it are left untouched.
/// Overlap is tested after each move, so this relies on `Tuning::validate`
/// keeping laser speed at or below `MAX_PROJECTILE_SPEED`.
pub fn frame_step(
    state: &mut GameState,
    input: &InputState,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Option<EndReason> {
    if !state.is_running() {
        return None;
    }

    // Hero
    let dy = input.vertical_delta(state.player.speed);
    state.player.move_by(dy, &state.arena, tuning.edge_margin);
    let hero = state.player.hitbox();

    // Lasers
    let global_speed = state.difficulty.projectile_speed;
    let mut i = 0;
    while i < state.projectiles.len() {
        let laser = &mut state.projectiles[i];
        laser.x -= match tuning.speed_mode {
            SpeedMode::Global => global_speed,
            SpeedMode::AtSpawn => laser.speed,
        };
        let hitbox = laser.hitbox();

        if overlaps(&hero, &hitbox) {
            let laser = state.projectiles.remove(i);
            log::info!("Hero hit by laser {} ({:?})", laser.id, laser.kind);
            events.push(GameEvent::PlayerHit);
            return Some(EndReason::Hit);
        }

        if exited_near_edge(&hitbox, &state.arena) {
            let laser = state.projectiles.remove(i);
            state.score += tuning.dodge_bonus;
            log::debug!("Dodged laser {} (score {})", laser.id, state.score);
            events.push(GameEvent::Dodged);
            continue;
        }

        i += 1;
    }

    None
}

/// One countdown tick: spend a second, award survival points, refresh difficulty.
pub fn countdown_step(
    state: &mut GameState,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Option<EndReason> {
    if !state.is_running() {
        return None;
    }

    state.time_remaining = state.time_remaining.saturating_sub(1);
    state.score += tuning.survival_bonus;
    state.elapsed = tuning.round_duration.saturating_sub(state.time_remaining);

    let difficulty = Difficulty::for_elapsed(state.elapsed, tuning);
    if difficulty.tier != state.difficulty.tier {
        log::info!(
            "Tier {} at {}s: hero {:.1}px/f, lasers {:.1}px/f, spawn every {:.0}ms",
            difficulty.tier,
            state.elapsed,
            difficulty.player_speed,
            difficulty.projectile_speed,
            difficulty.spawn_interval_ms
        );
        events.push(GameEvent::TierChanged(difficulty.tier));
    }
    state.difficulty = difficulty;
    state.player.speed = difficulty.player_speed;

    if state.time_remaining == 0 {
        return Some(EndReason::TimeUp);
    }
    None
}
