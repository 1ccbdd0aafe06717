//! Difficulty ramp
//!
//! A pure function of elapsed seconds. Recomputed on the countdown tick only;
//! there is no interpolation between tiers.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Values derived from the current tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub tier: u32,
    /// Hero pixels per frame
    pub player_speed: f32,
    /// Laser pixels per frame
    pub projectile_speed: f32,
    /// Delay before the next spawn
    pub spawn_interval_ms: f64,
}

/// `floor(elapsed / tier_seconds)`
#[inline]
pub fn tier_for_elapsed(elapsed: u32, tuning: &Tuning) -> u32 {
    elapsed / tuning.tier_seconds.max(1)
}

impl Difficulty {
    pub fn for_tier(tier: u32, tuning: &Tuning) -> Self {
        let t = tier as f32;
        Self {
            tier,
            player_speed: tuning.base_player_speed + t * tuning.player_speed_step,
            projectile_speed: tuning.base_projectile_speed + t * tuning.projectile_speed_step,
            spawn_interval_ms: (tuning.base_spawn_interval_ms
                - tier as f64 * tuning.spawn_decay_ms)
                .max(tuning.min_spawn_interval_ms),
        }
    }

    pub fn for_elapsed(elapsed: u32, tuning: &Tuning) -> Self {
        Self::for_tier(tier_for_elapsed(elapsed, tuning), tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_steps_every_ten_seconds() {
        let tuning = Tuning::default();
        assert_eq!(tier_for_elapsed(0, &tuning), 0);
        assert_eq!(tier_for_elapsed(9, &tuning), 0);
        assert_eq!(tier_for_elapsed(10, &tuning), 1);
        assert_eq!(tier_for_elapsed(19, &tuning), 1);
        assert_eq!(tier_for_elapsed(20, &tuning), 2);
        assert_eq!(tier_for_elapsed(60, &tuning), 6);
    }

    #[test]
    fn test_tier_one_values() {
        let tuning = Tuning::default();
        let d = Difficulty::for_elapsed(10, &tuning);
        assert_eq!(d.tier, 1);
        assert_eq!(d.player_speed, 4.5);
        assert_eq!(d.projectile_speed, 7.0);
        assert_eq!(d.spawn_interval_ms, 800.0);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let tuning = Tuning::default();
        // 900 - 6 * 100 = 300, floored to 350
        assert_eq!(Difficulty::for_tier(6, &tuning).spawn_interval_ms, 350.0);
        assert_eq!(Difficulty::for_tier(100, &tuning).spawn_interval_ms, 350.0);
    }

    proptest! {
        #[test]
        fn prop_tier_monotonic(a in 0u32..10_000, b in 0u32..10_000) {
            let tuning = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(tier_for_elapsed(lo, &tuning) <= tier_for_elapsed(hi, &tuning));
        }

        #[test]
        fn prop_tier_is_floor(t in 0u32..10_000) {
            let tuning = Tuning::default();
            prop_assert_eq!(tier_for_elapsed(t, &tuning), t / 10);
        }

        #[test]
        fn prop_interval_never_below_floor(tier in 0u32..1_000) {
            let tuning = Tuning::default();
            let d = Difficulty::for_tier(tier, &tuning);
            prop_assert!(d.spawn_interval_ms >= tuning.min_spawn_interval_ms);
            prop_assert!(d.spawn_interval_ms <= tuning.base_spawn_interval_ms);
        }
    }
}
