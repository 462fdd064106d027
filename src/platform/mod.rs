//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input
//! - Driving the loop from `requestAnimationFrame` (wasm32 only)

pub mod keyboard;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use keyboard::{Key, KeyState};
