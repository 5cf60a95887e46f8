//! Snake: grid movement on a fixed step interval
//!
//! Direction changes are queued; each step takes the first usable one and
//! drops the rest. Food makes the snake grow and shortens the step interval
//! down to a floor.

pub mod state;
pub mod tick;

pub use state::{Food, FoodKind, SnakeState, SnakeStatus, initial_snake};
pub use tick::{in_bounds, spawn_food, step, update};
