//! Browser entry points
//!
//! The JS presentation layer owns the canvas, the DOM and the
//! requestAnimationFrame loop. It calls into `WebArcade` for input and
//! once per frame, then reads `state_json()` to render.

use wasm_bindgen::prelude::*;

use crate::arcade::{Arcade, GameId};
use crate::autoplay::{self, AutoInput};
use crate::platform::{KeyValueStore, LocalStorage, MemoryStore};
use crate::sim::Direction;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Pocket Arcade starting...");
}

/// Arcade handle exported to JS
#[wasm_bindgen]
pub struct WebArcade {
    inner: Arcade,
}

#[wasm_bindgen]
impl WebArcade {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebArcade {
        let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
            Some(storage) => Box::new(storage),
            None => Box::new(MemoryStore::new()),
        };
        let seed = js_sys::Date::now() as u64 ^ (js_sys::Math::random() * u32::MAX as f64) as u64;
        WebArcade {
            inner: Arcade::new(store, seed),
        }
    }

    /// Loading screen animation completed
    pub fn finish_loading(&mut self) {
        self.inner.finish_loading();
    }

    /// Switch game by name ("brickrush", "1024", "snake")
    pub fn select_game(&mut self, name: &str) -> bool {
        match GameId::from_str(name) {
            Some(game) => {
                self.inner.select(game);
                true
            }
            None => {
                log::warn!("Unknown game: {}", name);
                false
            }
        }
    }

    pub fn back_to_menu(&mut self) {
        self.inner.back_to_menu();
    }

    /// Per-frame callback with elapsed milliseconds
    pub fn update(&mut self, dt_ms: f32) {
        self.inner.update(dt_ms);
    }

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn resume(&mut self) {
        self.inner.resume();
    }

    /// Direction by name or arrow key ("up", "ArrowLeft", ...)
    pub fn press(&mut self, name: &str) -> bool {
        match Direction::from_str(name) {
            Some(direction) => self.inner.press(direction),
            None => {
                log::warn!("Unknown direction: {}", name);
                false
            }
        }
    }

    /// Pointer x in canvas coordinates
    pub fn move_paddle(&mut self, x: f32) {
        self.inner.move_paddle(x);
    }

    pub fn continue_playing(&mut self) {
        self.inner.continue_playing();
    }

    /// Let the autopilot pick this frame's input
    pub fn autoplay(&mut self) {
        match self.inner.active().and_then(autoplay::pick_input) {
            Some(AutoInput::Paddle(x)) => self.inner.move_paddle(x),
            Some(AutoInput::Press(direction)) => {
                self.inner.press(direction);
            }
            None => {}
        }
    }

    /// Screen, active game state and best scores as JSON
    pub fn state_json(&self) -> String {
        match serde_json::to_string(&self.inner.snapshot()) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode state: {}", e);
                String::from("{}")
            }
        }
    }

    pub fn best_score(&self, name: &str) -> f64 {
        GameId::from_str(name)
            .map(|game| self.inner.scores().best(game) as f64)
            .unwrap_or(0.0)
    }
}

impl Default for WebArcade {
    fn default() -> Self {
        Self::new()
    }
}
