//! Difficulty presets
//!
//! The three presets are a closed set. Names coming from the selection UI
//! are parsed once at the boundary; the simulation only ever sees `Difficulty`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::ObstacleKind;

const EASY_OBSTACLES: &[ObstacleKind] = &[ObstacleKind::Meteor, ObstacleKind::Cheese];

const MEDIUM_HARD_OBSTACLES: &[ObstacleKind] = &[
    ObstacleKind::Meteor,
    ObstacleKind::Cheese,
    ObstacleKind::Lightning,
];

/// Immutable gameplay parameters for one difficulty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyConfig {
    pub obstacle_count: usize,
    /// Units per tick
    pub obstacle_speed: f32,
    /// Countdown at the start of a run (seconds)
    pub initial_time: f32,
    /// Seconds added per collected fruit
    pub time_bonus: f32,
    /// Obstacle kinds drawn uniformly at generation time
    pub obstacle_kinds: &'static [ObstacleKind],
}

static EASY: DifficultyConfig = DifficultyConfig {
    obstacle_count: 10,
    obstacle_speed: 1.0,
    initial_time: 120.0,
    time_bonus: 5.0,
    obstacle_kinds: EASY_OBSTACLES,
};

static MEDIUM: DifficultyConfig = DifficultyConfig {
    obstacle_count: 12,
    obstacle_speed: 2.0,
    initial_time: 120.0,
    time_bonus: 3.0,
    obstacle_kinds: MEDIUM_HARD_OBSTACLES,
};

static HARD: DifficultyConfig = DifficultyConfig {
    obstacle_count: 15,
    obstacle_speed: 3.0,
    initial_time: 90.0,
    time_bonus: 2.0,
    obstacle_kinds: MEDIUM_HARD_OBSTACLES,
};

/// Difficulty levels offered on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Returned when the selection UI hands over a name that is not a preset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty: {0:?}")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    /// All presets in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Upper-case label used in menus and logs
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// Menu tagline
    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Learn to Play",
            Difficulty::Medium => "Get Skilled",
            Difficulty::Hard => "Prove Yourself",
        }
    }

    pub fn config(self) -> &'static DifficultyConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        let easy = Difficulty::Easy.config();
        assert_eq!(easy.obstacle_count, 10);
        assert_eq!(easy.obstacle_speed, 1.0);
        assert_eq!(easy.initial_time, 120.0);
        assert_eq!(easy.time_bonus, 5.0);
        assert!(!easy.obstacle_kinds.contains(&ObstacleKind::Lightning));

        let medium = Difficulty::Medium.config();
        assert_eq!(medium.obstacle_count, 12);
        assert_eq!(medium.obstacle_speed, 2.0);
        assert_eq!(medium.time_bonus, 3.0);

        let hard = Difficulty::Hard.config();
        assert_eq!(hard.obstacle_count, 15);
        assert_eq!(hard.obstacle_speed, 3.0);
        assert_eq!(hard.initial_time, 90.0);
        assert_eq!(hard.time_bonus, 2.0);
        assert_eq!(hard.obstacle_kinds.len(), 3);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        for d in Difficulty::ALL {
            assert_eq!(d.as_str().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, UnknownDifficulty("nightmare".to_string()));
        assert!(err.to_string().contains("nightmare"));
    }
}
