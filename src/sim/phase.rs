//! Run phases and the transitions between them

use serde::{Deserialize, Serialize};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to pick a difficulty
    #[default]
    SelectingDifficulty,
    /// Active gameplay
    Playing,
    /// Health filled up
    Won,
    /// Countdown ran out
    Lost,
}

/// Things that can move a run between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    DifficultySelected,
    HealthFull,
    TimeUp,
    Restart,
}

impl GamePhase {
    /// Next phase for `event`, or `None` if the event does not apply here
    pub fn transition(self, event: PhaseEvent) -> Option<GamePhase> {
        match (self, event) {
            (GamePhase::SelectingDifficulty, PhaseEvent::DifficultySelected) => {
                Some(GamePhase::Playing)
            }
            (GamePhase::Playing, PhaseEvent::HealthFull) => Some(GamePhase::Won),
            (GamePhase::Playing, PhaseEvent::TimeUp) => Some(GamePhase::Lost),
            (GamePhase::Won | GamePhase::Lost, PhaseEvent::Restart) => {
                Some(GamePhase::SelectingDifficulty)
            }
            _ => None,
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}
