//! Balance formulas
//!
//! Everything that scales with `level` is computed here so a balance pass
//! touches one file. The formulas are linear in level; the probabilities are
//! clamped because linear growth would leave [0, 1] at high levels.

/// Chance per tick that a new bubble spawns
pub const SPAWN_CHANCE_BASE: f32 = 0.1;
pub const SPAWN_CHANCE_PER_LEVEL: f32 = 0.02;

/// Chance that a spawned bubble is hazardous
pub const HAZARD_CHANCE_BASE: f32 = 0.2;
pub const HAZARD_CHANCE_PER_LEVEL: f32 = 0.05;

/// Fall speed (percent of field height per tick)
pub const FALL_SPEED_BASE: f32 = 1.0;
pub const FALL_SPEED_PER_LEVEL: f32 = 0.5;

/// Probability that a tick spawns a bubble at the given level
pub fn spawn_chance(level: u32) -> f32 {
    (SPAWN_CHANCE_BASE + SPAWN_CHANCE_PER_LEVEL * level as f32).clamp(0.0, 1.0)
}

/// Probability that a spawned bubble is hazardous at the given level
pub fn hazard_chance(level: u32) -> f32 {
    (HAZARD_CHANCE_BASE + HAZARD_CHANCE_PER_LEVEL * level as f32).clamp(0.0, 1.0)
}

/// Fall speed of a bubble spawned at the given level
pub fn fall_speed(level: u32) -> f32 {
    FALL_SPEED_BASE + FALL_SPEED_PER_LEVEL * level as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_values() {
        assert!((spawn_chance(1) - 0.12).abs() < 1e-6);
        assert!((hazard_chance(1) - 0.25).abs() < 1e-6);
        assert_eq!(fall_speed(1), 1.5);
    }

    #[test]
    fn test_chances_stay_probabilities() {
        // Hazard chance saturates at level 16, spawn chance at level 45.
        for level in 0..1000 {
            let s = spawn_chance(level);
            let h = hazard_chance(level);
            assert!((0.0..=1.0).contains(&s), "spawn_chance({level}) = {s}");
            assert!((0.0..=1.0).contains(&h), "hazard_chance({level}) = {h}");
        }
        assert_eq!(hazard_chance(100), 1.0);
        assert_eq!(spawn_chance(100), 1.0);
    }

    #[test]
    fn test_speed_scales_with_level() {
        assert!(fall_speed(2) > fall_speed(1));
        assert_eq!(fall_speed(4), 3.0);
    }
}
