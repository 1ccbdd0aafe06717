//! What the render surface receives each frame
//!
//! The simulation never reads anything back from the surface.

use serde::{Deserialize, Serialize};

use crate::sim::collision::Rect;
use crate::sim::state::{EndReason, GameState, ProjectileKind, SessionPhase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub rect: Rect,
    pub kind: ProjectileKind,
}

/// Projection of the game state onto the surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub arena: Rect,
    pub player: Rect,
    pub projectiles: Vec<ProjectileView>,
    pub score: u64,
    pub time_remaining: u32,
    pub tier: u32,
    pub message: String,
    pub start_enabled: bool,
    pub reset_enabled: bool,
}

impl RenderSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            arena: state.arena,
            player: state.player.hitbox(),
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    id: p.id,
                    rect: p.hitbox(),
                    kind: p.kind,
                })
                .collect(),
            score: state.score,
            time_remaining: state.time_remaining,
            tier: state.tier(),
            message: status_message(state.phase, state.score, state.fresh),
            start_enabled: state.phase != SessionPhase::Running,
            reset_enabled: state.phase != SessionPhase::Idle,
        }
    }
}

/// Status line under the arena
pub fn status_message(phase: SessionPhase, score: u64, fresh: bool) -> String {
    match phase {
        SessionPhase::Idle if fresh => "Press Start, then dodge the lasers!".to_string(),
        SessionPhase::Idle => "Press Start to begin.".to_string(),
        SessionPhase::Running => "Dodge the lasers!".to_string(),
        SessionPhase::Ended(EndReason::Hit) => format!(
            "You got hit! Final score: {}. Press Reset or Start to try again.",
            score
        ),
        SessionPhase::Ended(EndReason::TimeUp) => format!(
            "Time's up! Final score: {}. Press Reset or Start to play again.",
            score
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;
    use crate::tuning::Tuning;

    #[test]
    fn test_idle_snapshot() {
        let game = Game::new(Tuning::default(), 1);
        let snap = game.snapshot();
        assert_eq!(snap.message, "Press Start, then dodge the lasers!");
        assert!(snap.start_enabled);
        assert!(!snap.reset_enabled);
        assert_eq!(snap.time_remaining, 60);
        assert!(snap.projectiles.is_empty());
    }

    #[test]
    fn test_controls_follow_phase() {
        let mut game = Game::new(Tuning::default(), 1);
        game.start();
        let snap = game.snapshot();
        assert_eq!(snap.message, "Dodge the lasers!");
        assert!(!snap.start_enabled);
        assert!(snap.reset_enabled);

        game.end(EndReason::TimeUp);
        let snap = game.snapshot();
        assert!(snap.start_enabled);
        assert!(snap.reset_enabled);

        game.reset();
        let snap = game.snapshot();
        assert_eq!(snap.message, "Press Start to begin.");
        assert!(!snap.reset_enabled);
    }

    #[test]
    fn test_end_messages_carry_score() {
        assert_eq!(
            status_message(SessionPhase::Ended(EndReason::Hit), 42, false),
            "You got hit! Final score: 42. Press Reset or Start to try again."
        );
        assert_eq!(
            status_message(SessionPhase::Ended(EndReason::TimeUp), 75, false),
            "Time's up! Final score: 75. Press Reset or Start to play again."
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = Game::new(Tuning::default(), 1);
        let json = serde_json::to_string(&game.snapshot()).expect("serializes");
        assert!(json.contains("\"time_remaining\":60"));
    }
}
