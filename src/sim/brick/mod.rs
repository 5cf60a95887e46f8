//! Brick Rush: ball-and-paddle breakout
//!
//! Balls bounce off the side and top walls and the paddle, break bricks,
//! and are lost through the floor. Clearing every breakable brick builds
//! the next level.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContact, ball_brick_overlap, ball_paddle_overlap, paddle_bounce, resolve_walls};
pub use state::{Ball, Brick, BrickKind, BrickPhase, BrickState, Paddle, PowerUp, PowerUpKind};
pub use tick::{generate_level, move_paddle, update};
