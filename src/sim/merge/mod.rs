//! 1024 merge grid
//!
//! `grid` holds the pure move/spawn functions, `session` layers the game
//! rules (score, best score, win, game over) on top.

pub mod grid;
pub mod session;

pub use grid::{
    Grid, MoveOutcome, Tile, TileIds, create_empty_grid, has_tile, is_game_over, move_grid,
    spawn_tile,
};
pub use session::MergeSession;
