//! Game state and core simulation types
//!
//! One `GameState` aggregate owns the hero, the ships, the lasers in flight
//! and the round bookkeeping. Nothing here is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, clamp_vertical};
use super::difficulty::Difficulty;
use crate::consts::*;
use crate::tuning::Tuning;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A laser touched the hero
    Hit,
    /// The countdown reached zero
    TimeUp,
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for a start request
    Idle,
    /// Round in progress
    Running,
    /// Round over, final score on display until start or reset
    Ended(EndReason),
}

/// Something the render surface may want to react to.
/// Drained once per frame; purely informational.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Spawned(ProjectileKind),
    Dodged,
    /// Transient hit flash on the hero
    PlayerHit,
    TierChanged(u32),
    Ended { reason: EndReason, score: u64 },
    Reset,
    /// Start the looping background video
    BackdropPlay,
    /// Pause and rewind the background video
    BackdropStop,
}

/// Laser color variant, one per ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Blue,
    Green,
    Red,
}

impl ProjectileKind {
    /// CSS class used by the DOM surface
    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectileKind::Blue => "laser-blue",
            ProjectileKind::Green => "laser-green",
            ProjectileKind::Red => "laser-red",
        }
    }
}

/// One of the ships on the right edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emitter {
    /// Ship body, arena-local
    pub body: Rect,
    pub kind: ProjectileKind,
}

impl Emitter {
    /// Where a fresh laser's top-left corner goes: just in front of the ship's nose
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(
            self.body.left() - self.body.size.x * 0.1,
            self.body.top() + self.body.size.y * 0.4,
        )
    }
}

/// The three ships (top, middle, bottom), fixed for the session
pub fn default_emitters() -> [Emitter; 3] {
    let rows = [
        (ARENA_HEIGHT / 6.0, ProjectileKind::Blue),
        (ARENA_HEIGHT / 2.0, ProjectileKind::Green),
        (ARENA_HEIGHT * 5.0 / 6.0, ProjectileKind::Red),
    ];
    rows.map(|(center_y, kind)| Emitter {
        body: Rect::new(SHIP_X, center_y - SHIP_HEIGHT / 2.0, SHIP_WIDTH, SHIP_HEIGHT),
        kind,
    })
}

/// The hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top edge, arena-local
    pub y: f32,
    /// Pixels per frame, refreshed from the difficulty tier
    pub speed: f32,
    /// Box relative to (PLAYER_X, y)
    pub size: Vec2,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            y: (ARENA_HEIGHT - PLAYER_HEIGHT) / 2.0,
            speed,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect {
            pos: Vec2::new(PLAYER_X, self.y),
            size: self.size,
        }
    }

    /// Move vertically by `dy` and keep the box inside the arena
    pub fn move_by(&mut self, dy: f32, arena: &Rect, margin: f32) {
        self.y = clamp_vertical(self.y + dy, self.size.y, arena, margin);
    }

    pub fn recenter(&mut self) {
        self.y = (ARENA_HEIGHT - self.size.y) / 2.0;
    }
}

/// A laser in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Speed at the moment of firing (pixels per frame)
    pub speed: f32,
    pub size: Vec2,
    pub kind: ProjectileKind,
}

impl Projectile {
    pub fn hitbox(&self) -> Rect {
        Rect {
            pos: Vec2::new(self.x, self.y),
            size: self.size,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: SessionPhase,
    pub arena: Rect,
    pub player: Player,
    pub emitters: Vec<Emitter>,
    /// Lasers in flight (empty unless Running)
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Whole seconds left on the countdown
    pub time_remaining: u32,
    /// Whole seconds since start
    pub elapsed: u32,
    /// Values derived from the current tier
    pub difficulty: Difficulty,
    /// True until the first reset; only changes the idle prompt
    pub fresh: bool,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        let difficulty = Difficulty::for_tier(0, tuning);
        Self {
            phase: SessionPhase::Idle,
            arena: Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT),
            player: Player::new(difficulty.player_speed),
            emitters: default_emitters().to_vec(),
            projectiles: Vec::new(),
            score: 0,
            time_remaining: tuning.round_duration,
            elapsed: 0,
            difficulty,
            fresh: true,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Rebuild every round value from the tuning constants
    pub fn restore_initial(&mut self, tuning: &Tuning) {
        self.projectiles.clear();
        self.score = 0;
        self.time_remaining = tuning.round_duration;
        self.elapsed = 0;
        self.difficulty = Difficulty::for_tier(0, tuning);
        self.player.speed = self.difficulty.player_speed;
        self.player.recenter();
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn tier(&self) -> u32 {
        self.difficulty.tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = GameState::new(&Tuning::default());
        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.time_remaining, 60);
        assert_eq!(state.player.y, (ARENA_HEIGHT - PLAYER_HEIGHT) / 2.0);
        assert_eq!(state.emitters.len(), 3);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_emitters_inside_arena_with_distinct_kinds() {
        let emitters = default_emitters();
        let arena = Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT);
        for e in &emitters {
            let a = e.anchor();
            assert!(a.x > 0.0 && a.x < arena.right());
            assert!(a.y > 0.0 && a.y < arena.bottom());
        }
        assert_ne!(emitters[0].kind, emitters[1].kind);
        assert_ne!(emitters[1].kind, emitters[2].kind);
        assert!(emitters[0].anchor().y < emitters[1].anchor().y);
        assert!(emitters[1].anchor().y < emitters[2].anchor().y);
    }

    #[test]
    fn test_anchor_sits_in_front_of_ship() {
        let e = Emitter {
            body: Rect::new(700.0, 100.0, 50.0, 40.0),
            kind: ProjectileKind::Green,
        };
        assert_eq!(e.anchor(), Vec2::new(695.0, 116.0));
    }

    #[test]
    fn test_player_move_is_clamped() {
        let arena = Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT);
        let mut player = Player::new(4.0);
        player.move_by(-10_000.0, &arena, 8.0);
        assert_eq!(player.y, 8.0);
        player.move_by(10_000.0, &arena, 8.0);
        assert_eq!(player.y, ARENA_HEIGHT - PLAYER_HEIGHT - 8.0);
    }
}
