//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no catch-up loops
//! - Seeded RNG only
//! - Stable iteration order (obstacles by insertion)
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod geometry;
pub mod phase;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use difficulty::{Difficulty, DifficultyConfig, UnknownDifficulty};
pub use geometry::{Rect, is_placeable, overlaps};
pub use phase::{GamePhase, PhaseEvent};
pub use snapshot::{Snapshot, format_time};
pub use spawner::{FRUIT_MAX_ATTEMPTS, OBSTACLE_MAX_ATTEMPTS, generate_obstacles, spawn_fruit};
pub use state::{
    Axis, FRUIT_KINDS, Facing, Fruit, FruitKind, GameState, Obstacle, ObstacleKind, Player,
};
pub use tick::{TickInput, sanitize_delta, tick};
