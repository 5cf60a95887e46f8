//! Simulation module
//!
//! All gameplay logic lives here, one submodule per game. Engines are plain
//! state-transition functions:
//! - Elapsed time and input intents in, next state out
//! - Each engine owns its RNG and id counters (no process-wide state)
//! - No rendering or platform dependencies

pub mod brick;
pub mod direction;
pub mod merge;
pub mod snake;

pub use brick::{Ball, Brick, BrickKind, BrickPhase, BrickState, Paddle};
pub use direction::Direction;
pub use merge::{Grid, MergeSession, MoveOutcome, Tile, TileIds};
pub use snake::{Food, FoodKind, SnakeState, SnakeStatus};
