//! Held-key tracking for the four arrow keys

use crate::game_loop::InputSource;
use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Which arrow keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: TickInput,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Up => self.held.up = down,
            Key::Down => self.held.down = down,
            Key::Left => self.held.left = down,
            Key::Right => self.held.right = down,
        }
    }

    /// Key-down handler. Returns true if the key was consumed, so the host
    /// can stop the page from scrolling.
    pub fn key_down(&mut self, dom_key: &str) -> bool {
        self.update(dom_key, true)
    }

    pub fn key_up(&mut self, dom_key: &str) -> bool {
        self.update(dom_key, false)
    }

    fn update(&mut self, dom_key: &str, down: bool) -> bool {
        match Key::from_dom(dom_key) {
            Some(key) => {
                self.set(key, down);
                true
            }
            None => false,
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.held = TickInput::default();
    }
}

impl InputSource for KeyState {
    fn sample(&self) -> TickInput {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_held_keys() {
        let mut keys = KeyState::new();
        assert!(keys.key_down("ArrowLeft"));
        assert!(keys.key_down("ArrowUp"));
        assert_eq!(
            keys.sample(),
            TickInput {
                up: true,
                left: true,
                ..Default::default()
            }
        );

        assert!(keys.key_up("ArrowLeft"));
        assert_eq!(
            keys.sample(),
            TickInput {
                up: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_ignores_other_keys() {
        let mut keys = KeyState::new();
        assert!(!keys.key_down("a"));
        assert!(!keys.key_down(" "));
        assert!(!keys.key_up("Enter"));
        assert!(!keys.sample().any());
    }

    #[test]
    fn test_repeat_and_clear() {
        let mut keys = KeyState::new();
        keys.key_down("ArrowRight");
        keys.key_down("ArrowRight");
        keys.key_down("ArrowDown");
        keys.clear();
        assert_eq!(keys.sample(), TickInput::default());
    }
}
