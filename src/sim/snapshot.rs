//! Read-only view of a run for renderers
//!
//! A snapshot borrows the state after a tick; renderers never get write access.

use serde::Serialize;

use super::difficulty::{Difficulty, DifficultyConfig};
use super::phase::GamePhase;
use super::state::{Fruit, GameState, Obstacle, Player};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub difficulty: Option<Difficulty>,
    pub config: Option<&'a DifficultyConfig>,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub fruit: Option<&'a Fruit>,
    pub health: u32,
    pub max_health: u32,
    pub time_remaining: f32,
    pub fruits_collected: u32,
    pub fruits_to_win: u32,
    pub arena: (f32, f32),
    /// Simulation ticks since the run started
    pub ticks: u64,
    #[serde(skip)]
    warning_time: f32,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            config: self.config(),
            player: &self.player,
            obstacles: &self.obstacles,
            fruit: self.fruit.as_ref(),
            health: self.health,
            max_health: self.tuning.max_health,
            time_remaining: self.time_remaining,
            fruits_collected: self.fruits_collected,
            fruits_to_win: self.tuning.fruits_to_win,
            arena: (self.tuning.arena_width, self.tuning.arena_height),
            ticks: self.time_ticks,
            warning_time: self.tuning.warning_time,
        }
    }
}

impl Snapshot<'_> {
    /// Countdown as "MM:SS"
    pub fn time_label(&self) -> String {
        format_time(self.time_remaining)
    }

    /// Timer should be drawn in the warning color
    pub fn timer_warning(&self) -> bool {
        self.time_remaining <= self.warning_time
    }

    /// Health as a fraction of the bar
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Time spent on a run, shown on the victory screen
    pub fn completion_time(&self) -> Option<f32> {
        match (self.phase, self.config) {
            (GamePhase::Won, Some(config)) => Some(config.initial_time - self.time_remaining),
            _ => None,
        }
    }
}

/// Format whole seconds as "MM:SS"
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0).floor() as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}
