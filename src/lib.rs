//! Fruit Rush - A single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, phases)
//! - `game_loop`: Fixed-step frame gate and the driver that feeds the renderer
//! - `platform`: Keyboard input and the browser bridge
//! - `tuning`: Data-driven game balance

pub mod game_loop;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use game_loop::{FrameGate, Game, InputSource, Renderer};
pub use tuning::{Tuning, TuningError};

/// Game loop constants
pub mod consts {
    /// Target display rate the frame gate locks to
    pub const FPS: f64 = 60.0;
    /// Minimum interval between simulation steps (ms)
    pub const FRAME_TIME_MS: f64 = 1000.0 / FPS;
    /// Largest delta a single tick will accept (ms); longer stalls are clamped
    pub const MAX_TICK_DELTA_MS: f32 = 250.0;
    /// Countdown granularity (ms per displayed second)
    pub const MS_PER_SECOND: f32 = 1000.0;
}
