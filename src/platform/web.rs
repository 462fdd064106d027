//! Browser bridge
//!
//! JavaScript owns the canvas, the event listeners and `requestAnimationFrame`.
//! It forwards timestamps and key events here and draws the JSON snapshot
//! returned by `frame`.

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use super::keyboard::KeyState;
use crate::game_loop::{Game, Renderer};
use crate::sim::{Difficulty, GameState, Snapshot};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Fruit Rush starting...");
}

/// Serializes each rendered snapshot for the JS side
#[derive(Default)]
struct JsonFrame {
    json: String,
}

impl Renderer for JsonFrame {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        match serde_json::to_string(snapshot) {
            Ok(json) => self.json = json,
            Err(e) => log::warn!("Snapshot serialization failed: {}", e),
        }
    }
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    keys: KeyState,
    frame: JsonFrame,
}

#[wasm_bindgen]
impl WebGame {
    /// New game seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        Self::with_seed(js_sys::Date::now() as u64)
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> WebGame {
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            game: Game::new(GameState::new(seed)),
            keys: KeyState::new(),
            frame: JsonFrame::default(),
        }
    }

    /// `requestAnimationFrame` callback. Returns the snapshot JSON when a step ran.
    pub fn frame(&mut self, now: f64) -> Option<String> {
        if self.game.frame(now, &self.keys, &mut self.frame) {
            Some(self.frame.json.clone())
        } else {
            None
        }
    }

    /// Current state as JSON, whether or not a step is due
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.state.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = onKeyDown)]
    pub fn on_key_down(&mut self, event: &KeyboardEvent) {
        if self.keys.key_down(&event.key()) {
            event.prevent_default();
        }
    }

    #[wasm_bindgen(js_name = onKeyUp)]
    pub fn on_key_up(&mut self, event: &KeyboardEvent) {
        if self.keys.key_up(&event.key()) {
            event.prevent_default();
        }
    }

    /// Window lost focus; key-up events will not arrive
    #[wasm_bindgen(js_name = onBlur)]
    pub fn on_blur(&mut self) {
        self.keys.clear();
    }

    /// Difficulty button clicked. Unknown names are rejected; a valid name
    /// outside the selection screen is ignored and returns false.
    #[wasm_bindgen(js_name = selectDifficulty)]
    pub fn select_difficulty(&mut self, name: &str) -> Result<bool, JsValue> {
        let difficulty: Difficulty = name
            .parse()
            .map_err(|e: crate::sim::UnknownDifficulty| JsValue::from_str(&e.to_string()))?;
        Ok(self.game.select_difficulty(difficulty))
    }

    /// "Play Again" clicked
    pub fn restart(&mut self) -> bool {
        self.game.restart()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
