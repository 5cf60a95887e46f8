//! Pocket Arcade - simulation cores for three browser arcade games
//!
//! Core modules:
//! - `sim`: Per-game simulation (Brick Rush physics, 1024 merge grid, Snake)
//! - `arcade`: Game selection and the single active engine
//! - `highscores`: Best score per game
//! - `platform`: Browser/native storage abstraction
//! - `autoplay`: Demo autopilot for each game
//! - `web`: wasm-bindgen surface for the JS presentation layer

pub mod arcade;
pub mod autoplay;
pub mod highscores;
pub mod platform;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use arcade::{ActiveGame, Arcade, GameId, Screen};
pub use highscores::HighScores;
pub use sim::Direction;

/// Game configuration constants
pub mod consts {
    /// Reference frame duration the action games are tuned against (ms)
    pub const REFERENCE_FRAME_MS: f32 = 16.67;

    /// Brick Rush (ball and paddle)
    pub mod brick {
        pub const CANVAS_WIDTH: f32 = 800.0;
        pub const CANVAS_HEIGHT: f32 = 600.0;

        pub const PADDLE_WIDTH: f32 = 100.0;
        pub const PADDLE_HEIGHT: f32 = 15.0;
        /// Gap between the paddle's bottom edge and the canvas bottom
        pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
        /// Horizontal speed per pixel of hit offset from paddle center
        pub const DEFLECTION_FACTOR: f32 = 0.15;

        pub const BALL_RADIUS: f32 = 8.0;
        pub const BALL_START_X: f32 = CANVAS_WIDTH / 2.0;
        pub const BALL_START_Y: f32 = CANVAS_HEIGHT - 40.0;
        /// Launch velocity in pixels per reference frame
        pub const BALL_START_DX: f32 = 4.0;
        pub const BALL_START_DY: f32 = -4.0;

        pub const BRICK_ROWS: usize = 6;
        pub const BRICK_COLS: usize = 10;
        pub const BRICK_PADDING: f32 = 10.0;
        pub const BRICK_HEIGHT: f32 = 30.0;
        pub const BRICK_WIDTH: f32 =
            (CANVAS_WIDTH - (BRICK_COLS as f32 + 1.0) * BRICK_PADDING) / BRICK_COLS as f32;
        /// Space above the first brick row
        pub const BRICK_TOP_OFFSET: f32 = 50.0;
        /// Points per brick on level 1 (scales linearly with level)
        pub const BRICK_BASE_VALUE: u64 = 10;
        /// Hue step between brick columns (degrees)
        pub const BRICK_HUE_STEP: u16 = 36;

        pub const BRICK_SPAWN_CHANCE: f64 = 0.9;
        pub const STEEL_CHANCE: f64 = 0.05;
        pub const POWERUP_CHANCE: f64 = 0.1;

        pub const START_LIVES: u32 = 3;
    }

    /// 1024 (merge grid)
    pub mod merge {
        pub const GRID_SIZE: usize = 4;
        /// Probability a spawned tile is a 2 (otherwise 4)
        pub const SPAWN_TWO_CHANCE: f64 = 0.9;
        pub const WIN_VALUE: u32 = 1024;
    }

    /// Snake
    pub mod snake {
        pub const GRID_SIZE: i32 = 20;
        /// Tick interval at the start of a game (ms)
        pub const INITIAL_INTERVAL_MS: f32 = 150.0;
        /// Fastest tick interval (ms)
        pub const MIN_INTERVAL_MS: f32 = 50.0;
        /// Interval reduction per food eaten (ms)
        pub const INTERVAL_DECREMENT_MS: f32 = 2.0;

        pub const NORMAL_FOOD_POINTS: u64 = 10;
        pub const GOLD_FOOD_POINTS: u64 = 50;
        pub const GOLD_FOOD_CHANCE: f64 = 0.1;
    }
}

/// Ratio of elapsed frame time to the reference frame
#[inline]
pub fn time_scale(dt_ms: f32) -> f32 {
    dt_ms / consts::REFERENCE_FRAME_MS
}
