//! 1024 game session
//!
//! Owns the grid, tile ids and RNG, and applies the game rules around
//! `move_grid`: a move that changes nothing neither spawns a tile nor counts.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::grid::{Grid, TileIds, create_empty_grid, has_tile, is_game_over, move_grid, spawn_tile};
use crate::consts::merge::WIN_VALUE;
use crate::sim::Direction;

/// A single 1024 game
#[derive(Debug, Clone, Serialize)]
pub struct MergeSession {
    pub grid: Grid,
    pub score: u64,
    pub best_score: u64,
    /// Legal moves made this game
    pub moves: u32,
    /// A 1024 tile has appeared
    pub won: bool,
    /// Player chose to continue after winning
    pub keep_playing: bool,
    pub game_over: bool,
    #[serde(skip)]
    ids: TileIds,
    #[serde(skip)]
    rng: Pcg32,
}

impl MergeSession {
    pub fn new(seed: u64, best_score: u64) -> Self {
        let mut session = Self {
            grid: create_empty_grid(),
            score: 0,
            best_score,
            moves: 0,
            won: false,
            keep_playing: false,
            game_over: false,
            ids: TileIds::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        session.restart();
        session
    }

    /// Start over with a fresh board (best score is kept)
    pub fn restart(&mut self) {
        let grid = spawn_tile(&create_empty_grid(), &mut self.ids, &mut self.rng);
        self.grid = spawn_tile(&grid, &mut self.ids, &mut self.rng);
        self.score = 0;
        self.moves = 0;
        self.won = false;
        self.keep_playing = false;
        self.game_over = false;
        log::info!("1024: new game");
    }

    /// Moves are locked after game over, and after a win until the
    /// player opts to keep playing
    pub fn accepts_moves(&self) -> bool {
        !self.game_over && (!self.won || self.keep_playing)
    }

    /// Apply a move. Returns true if anything moved.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if !self.accepts_moves() {
            return false;
        }

        let outcome = move_grid(&self.grid, direction, &mut self.ids);
        if !outcome.moved {
            return false;
        }

        self.grid = spawn_tile(&outcome.grid, &mut self.ids, &mut self.rng);
        self.moves += 1;
        self.score += outcome.score;
        if self.score > self.best_score {
            self.best_score = self.score;
        }

        if !self.won && has_tile(&self.grid, WIN_VALUE) {
            self.won = true;
            log::info!("1024: reached {} after {} moves", WIN_VALUE, self.moves);
        }

        if is_game_over(&self.grid) {
            self.game_over = true;
            log::info!("1024: game over, score {}", self.score);
        }

        true
    }

    /// Check whether a move would change the board, without applying it
    pub fn would_move(&self, direction: Direction) -> bool {
        let mut ids = self.ids.clone();
        move_grid(&self.grid, direction, &mut ids).moved
    }

    /// Continue after a win
    pub fn continue_playing(&mut self) {
        if self.won {
            self.keep_playing = true;
        }
    }

    /// Replace the board (and reset the flags derived from it)
    pub fn load_grid(&mut self, grid: Grid) {
        self.won = has_tile(&grid, WIN_VALUE);
        self.game_over = is_game_over(&grid);
        self.grid = grid;
    }

    /// Id allocator for building boards that share this session's ids
    pub fn ids_mut(&mut self) -> &mut TileIds {
        &mut self.ids
    }
}
