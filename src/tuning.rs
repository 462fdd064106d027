//! Data-driven game balance
//!
//! Every gameplay number that is not part of a difficulty preset lives here.
//! Missing JSON fields fall back to the shipped defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::spawner::{FRUIT_MAX_ATTEMPTS, OBSTACLE_MAX_ATTEMPTS};

/// Errors produced while loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    /// Distance from the left wall at spawn
    pub player_start_x: f32,
    pub player_size: f32,
    /// Units per tick
    pub player_speed: f32,
    /// Walk distance per animation frame
    pub anim_step: f32,
    pub anim_frames: u8,

    // === Health & scoring ===
    pub max_health: u32,
    pub health_per_fruit: u32,
    /// Displayed on the loss screen only
    pub fruits_to_win: u32,
    /// Seconds left at which the timer turns red
    pub warning_time: f32,

    // === Fruit spawning ===
    pub fruit_size: f32,
    pub fruit_spawn_inset: f32,
    pub fruit_min_player_distance: f32,
    pub fruit_max_attempts: u32,

    // === Obstacle spawning ===
    pub obstacle_size: f32,
    pub obstacle_inset_x: f32,
    pub obstacle_inset_y: f32,
    /// Padding around the player's spawn that obstacles must avoid
    pub player_start_clearance: f32,
    /// Half-width of an obstacle's patrol window
    pub patrol_range: f32,
    /// Patrol windows stay this far from the arena edge
    pub patrol_inset: f32,
    pub obstacle_max_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,

            player_start_x: 50.0,
            player_size: 40.0,
            player_speed: 4.0,
            anim_step: 8.0,
            anim_frames: 4,

            max_health: 100,
            health_per_fruit: 5,
            fruits_to_win: 20,
            warning_time: 30.0,

            fruit_size: 30.0,
            fruit_spawn_inset: 20.0,
            fruit_min_player_distance: 80.0,
            fruit_max_attempts: FRUIT_MAX_ATTEMPTS,

            obstacle_size: 50.0,
            obstacle_inset_x: 150.0,
            obstacle_inset_y: 50.0,
            player_start_clearance: 50.0,
            patrol_range: 100.0,
            patrol_inset: 50.0,
            obstacle_max_attempts: OBSTACLE_MAX_ATTEMPTS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the spawner and tick cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(TuningError::Invalid("arena dimensions must be positive"));
        }
        if self.player_size <= 0.0 || self.fruit_size <= 0.0 || self.obstacle_size <= 0.0 {
            return Err(TuningError::Invalid("entity sizes must be positive"));
        }
        if self.player_size > self.arena_width || self.player_size > self.arena_height {
            return Err(TuningError::Invalid("player does not fit in the arena"));
        }
        if self.anim_frames == 0 {
            return Err(TuningError::Invalid("anim_frames must be at least 1"));
        }
        if self.max_health == 0 {
            return Err(TuningError::Invalid("max_health must be positive"));
        }
        let (fruit_lo, fruit_hi) = self.fruit_spawn_x();
        let (fruit_lo_y, fruit_hi_y) = self.fruit_spawn_y();
        if fruit_lo > fruit_hi || fruit_lo_y > fruit_hi_y {
            return Err(TuningError::Invalid("fruit spawn region is empty"));
        }
        let (obs_lo, obs_hi) = self.obstacle_spawn_x();
        let (obs_lo_y, obs_hi_y) = self.obstacle_spawn_y();
        if obs_lo > obs_hi || obs_lo_y > obs_hi_y {
            return Err(TuningError::Invalid("obstacle spawn region is empty"));
        }
        if self.patrol_range < 0.0 {
            return Err(TuningError::Invalid("patrol_range must not be negative"));
        }
        // Patrol windows are clamped to this band, so every spawn point must lie inside it
        let band_x = self.arena_width - self.obstacle_size - self.patrol_inset;
        let band_y = self.arena_height - self.obstacle_size - self.patrol_inset;
        if (obs_lo as f32) < self.patrol_inset
            || (obs_lo_y as f32) < self.patrol_inset
            || obs_hi as f32 > band_x
            || obs_hi_y as f32 > band_y
        {
            return Err(TuningError::Invalid(
                "obstacle spawn region leaves the patrol band",
            ));
        }
        Ok(())
    }

    /// Top-left corner of the player at the start of a run
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            self.player_start_x,
            self.arena_height / 2.0 - self.player_size / 2.0,
        )
    }

    /// Inclusive integer range for a fruit's x coordinate
    pub fn fruit_spawn_x(&self) -> (i32, i32) {
        (
            self.fruit_spawn_inset as i32,
            (self.arena_width - self.fruit_size - self.fruit_spawn_inset) as i32,
        )
    }

    pub fn fruit_spawn_y(&self) -> (i32, i32) {
        (
            self.fruit_spawn_inset as i32,
            (self.arena_height - self.fruit_size - self.fruit_spawn_inset) as i32,
        )
    }

    /// Inclusive integer range for an obstacle's x coordinate
    pub fn obstacle_spawn_x(&self) -> (i32, i32) {
        (
            self.obstacle_inset_x as i32,
            (self.arena_width - self.obstacle_size - self.obstacle_inset_x) as i32,
        )
    }

    pub fn obstacle_spawn_y(&self) -> (i32, i32) {
        (
            self.obstacle_inset_y as i32,
            (self.arena_height - self.obstacle_size - self.obstacle_inset_y) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_default_spawn_regions() {
        let tuning = Tuning::default();
        assert_eq!(tuning.obstacle_spawn_x(), (150, 600));
        assert_eq!(tuning.obstacle_spawn_y(), (50, 500));
        assert_eq!(tuning.fruit_spawn_x(), (20, 750));
        assert_eq!(tuning.fruit_spawn_y(), (20, 550));
        assert_eq!(tuning.player_start(), Vec2::new(50.0, 280.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "player_speed": 6.0 }"#).unwrap();
        assert_eq!(tuning.player_speed, 6.0);
        assert_eq!(tuning.arena_width, 800.0);
        assert_eq!(tuning.fruit_max_attempts, 50);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_empty_spawn_region() {
        let err = Tuning::from_json(r#"{ "obstacle_inset_x": 500.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_spawn_region_outside_patrol_band() {
        // Obstacles could spawn at x=20, left of the 50-unit patrol inset
        let err = Tuning::from_json(r#"{ "obstacle_inset_x": 20.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "patrol_inset": 80.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "patrol_range": -10.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        // Spawn region touching the band edge is fine
        assert!(Tuning::from_json(r#"{ "obstacle_inset_y": 50.0, "patrol_inset": 50.0 }"#).is_ok());
    }
}
