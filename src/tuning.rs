//! Game balance values
//!
//! Everything the difficulty ramp and scoring read lives here, so a round can
//! be re-balanced from a JSON file without touching the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How difficulty changes reach lasers that are already in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedMode {
    /// Every laser moves at the current tier's speed, including ones already fired
    #[default]
    Global,
    /// Each laser keeps the speed it was fired with
    AtSpawn,
}

/// Balance values for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Round ===
    /// Round length in countdown ticks (seconds)
    pub round_duration: u32,
    /// Points per laser that leaves the arena on the hero's side
    pub dodge_bonus: u64,
    /// Points per countdown tick survived
    pub survival_bonus: u64,
    /// Elapsed seconds per difficulty tier
    pub tier_seconds: u32,

    // === Hero ===
    /// Pixels per frame at tier 0
    pub base_player_speed: f32,
    /// Extra pixels per frame per tier
    pub player_speed_step: f32,
    /// Gap kept between the hero and the top/bottom arena edges
    pub edge_margin: f32,

    // === Lasers ===
    /// Pixels per frame at tier 0
    pub base_projectile_speed: f32,
    /// Extra pixels per frame per tier
    pub projectile_speed_step: f32,
    /// How tier changes apply to lasers already in flight
    pub speed_mode: SpeedMode,

    // === Spawning ===
    /// Milliseconds between spawns at tier 0
    pub base_spawn_interval_ms: f64,
    /// Milliseconds shaved off the interval per tier
    pub spawn_decay_ms: f64,
    /// Floor for the spawn interval
    pub min_spawn_interval_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            round_duration: 60,
            dodge_bonus: 5,
            survival_bonus: 1,
            tier_seconds: 10,

            base_player_speed: 4.0,
            player_speed_step: 0.5,
            edge_margin: 8.0,

            base_projectile_speed: 6.0,
            projectile_speed_step: 1.0,
            speed_mode: SpeedMode::Global,

            base_spawn_interval_ms: 900.0,
            spawn_decay_ms: 100.0,
            min_spawn_interval_ms: 350.0,
        }
    }
}

/// Rejected tuning values
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    Parse(String),
    ZeroDuration,
    ZeroTierLength,
    NonPositiveSpeed { field: &'static str, value: f32 },
    NonPositiveInterval { field: &'static str, value: f64 },
    NegativeStep { field: &'static str },
    FloorAboveBase { min_ms: f64, base_ms: f64 },
    MarginTooLarge { margin: f32 },
    /// Lasers would move far enough in one frame to skip over the hero
    TunnelingSpeed { peak: f32, limit: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid tuning JSON: {msg}"),
            Self::ZeroDuration => write!(f, "round_duration must be at least 1"),
            Self::ZeroTierLength => write!(f, "tier_seconds must be at least 1"),
            Self::NonPositiveSpeed { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            Self::NonPositiveInterval { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            Self::NegativeStep { field } => write!(f, "{field} must not be negative"),
            Self::FloorAboveBase { min_ms, base_ms } => write!(
                f,
                "min_spawn_interval_ms ({min_ms}) exceeds base_spawn_interval_ms ({base_ms})"
            ),
            Self::MarginTooLarge { margin } => {
                write!(f, "edge_margin {margin} leaves no room for the hero")
            }
            Self::TunnelingSpeed { peak, limit } => write!(
                f,
                "laser speed peaks at {peak}px/frame, above the {limit}px/frame hit-test limit"
            ),
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the values describe a playable round
    pub fn validate(&self) -> Result<(), TuningError> {
        use crate::consts::{ARENA_HEIGHT, MAX_PROJECTILE_SPEED, PLAYER_HEIGHT};

        if self.round_duration == 0 {
            return Err(TuningError::ZeroDuration);
        }
        if self.tier_seconds == 0 {
            return Err(TuningError::ZeroTierLength);
        }
        for (field, value) in [
            ("base_player_speed", self.base_player_speed),
            ("base_projectile_speed", self.base_projectile_speed),
        ] {
            if !(value > 0.0) {
                return Err(TuningError::NonPositiveSpeed { field, value });
            }
        }
        for (field, value) in [
            ("base_spawn_interval_ms", self.base_spawn_interval_ms),
            ("min_spawn_interval_ms", self.min_spawn_interval_ms),
        ] {
            if !(value > 0.0) {
                return Err(TuningError::NonPositiveInterval { field, value });
            }
        }
        for (field, value) in [
            ("player_speed_step", self.player_speed_step),
            ("projectile_speed_step", self.projectile_speed_step),
        ] {
            if !(value >= 0.0) {
                return Err(TuningError::NegativeStep { field });
            }
        }
        if !(self.spawn_decay_ms >= 0.0) {
            return Err(TuningError::NegativeStep {
                field: "spawn_decay_ms",
            });
        }
        if self.min_spawn_interval_ms > self.base_spawn_interval_ms {
            return Err(TuningError::FloorAboveBase {
                min_ms: self.min_spawn_interval_ms,
                base_ms: self.base_spawn_interval_ms,
            });
        }
        if !(self.edge_margin >= 0.0) || 2.0 * self.edge_margin + PLAYER_HEIGHT > ARENA_HEIGHT {
            return Err(TuningError::MarginTooLarge {
                margin: self.edge_margin,
            });
        }
        let peak = self.peak_projectile_speed();
        if peak > MAX_PROJECTILE_SPEED {
            return Err(TuningError::TunnelingSpeed {
                peak,
                limit: MAX_PROJECTILE_SPEED,
            });
        }
        Ok(())
    }

    /// Laser speed at the last tier a round can reach
    pub fn peak_projectile_speed(&self) -> f32 {
        let last_tier = self.round_duration / self.tier_seconds.max(1);
        self.base_projectile_speed + last_tier as f32 * self.projectile_speed_step
    }

    /// Load tuning from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Rejected tuning {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
