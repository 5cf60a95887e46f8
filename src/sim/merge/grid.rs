//! Merge grid state and move resolution
//!
//! A move rotates the grid so the requested direction becomes "left",
//! slides every row independently, then rotates back.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::merge::*;
use crate::sim::Direction;

/// A numbered tile. Every spawn or merge produces a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: u64,
    pub value: u32,
    /// Tile was produced by a merge during the last move
    #[serde(default)]
    pub merged: bool,
}

/// Monotonic tile id allocator, owned by the game session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileIds {
    last: u64,
}

impl TileIds {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Allocate the next id (first id is 1)
    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

type Row = [Option<Tile>; GRID_SIZE];

/// Fixed-size board, row-major, `None` = empty cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [Row; GRID_SIZE],
}

impl Grid {
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    /// Place (or clear) a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, tile: Option<Tile>) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = tile;
        }
    }

    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.cells
    }

    /// Iterate over occupied cells as (row, col, tile)
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.as_ref().map(|t| (r, c, t)))
        })
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn max_value(&self) -> u32 {
        self.tiles().map(|(_, _, t)| t.value).max().unwrap_or(0)
    }

    /// Build a grid from tile values (0 = empty), assigning fresh ids
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE], ids: &mut TileIds) -> Self {
        let mut grid = Self::default();
        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    grid.cells[r][c] = Some(Tile {
                        id: ids.next_id(),
                        value,
                        merged: false,
                    });
                }
            }
        }
        grid
    }

    /// Tile values (0 = empty)
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (r, c, tile) in self.tiles() {
            out[r][c] = tile.value;
        }
        out
    }

    /// Quarter turn counter-clockwise
    fn rotate_left(&self) -> Self {
        let mut rotated = Self::default();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                rotated.cells[GRID_SIZE - 1 - c][r] = self.cells[r][c];
            }
        }
        rotated
    }

    fn rotated_left(&self, turns: usize) -> Self {
        let mut grid = self.clone();
        for _ in 0..turns % 4 {
            grid = grid.rotate_left();
        }
        grid
    }
}

/// Result of sliding the whole grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// Sum of the values of all tiles created by merges
    pub score: u64,
    /// Any cell's tile identity changed
    pub moved: bool,
}

pub fn create_empty_grid() -> Grid {
    Grid::default()
}

/// Place a 2 (or occasionally a 4) on a random empty cell
///
/// Returns the grid unchanged when it is full.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &Grid, ids: &mut TileIds, rng: &mut R) -> Grid {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return grid.clone();
    }

    let (r, c) = empty[rng.random_range(0..empty.len())];
    let value = if rng.random_bool(SPAWN_TWO_CHANCE) { 2 } else { 4 };
    let tile = Tile {
        id: ids.next_id(),
        value,
        merged: false,
    };
    log::debug!("Spawned {} at ({}, {})", value, r, c);

    let mut next = grid.clone();
    next.cells[r][c] = Some(tile);
    next
}

/// Slide one row toward index 0, merging equal neighbours once
fn slide_row(row: &Row, ids: &mut TileIds) -> (Row, u64) {
    let tiles: Vec<Tile> = row.iter().flatten().copied().collect();
    let mut out: Row = [None; GRID_SIZE];
    let mut score = 0;
    let mut slot = 0;
    let mut i = 0;

    while i < tiles.len() {
        let tile = tiles[i];
        if let Some(next) = tiles.get(i + 1)
            && next.value == tile.value
        {
            let value = tile.value * 2;
            score += u64::from(value);
            out[slot] = Some(Tile {
                id: ids.next_id(),
                value,
                merged: true,
            });
            i += 2;
        } else {
            out[slot] = Some(Tile {
                merged: false,
                ..tile
            });
            i += 1;
        }
        slot += 1;
    }

    (out, score)
}

/// Slide every tile toward `direction`
pub fn move_grid(grid: &Grid, direction: Direction, ids: &mut TileIds) -> MoveOutcome {
    let turns = match direction {
        Direction::Left => 0,
        Direction::Up => 1,
        Direction::Right => 2,
        Direction::Down => 3,
    };

    let rotated = grid.rotated_left(turns);
    let mut slid = Grid::default();
    let mut score = 0;
    let mut moved = false;

    for (r, row) in rotated.cells.iter().enumerate() {
        let (new_row, row_score) = slide_row(row, ids);
        score += row_score;
        let ids_before = row.iter().map(|t| t.map(|t| t.id));
        let ids_after = new_row.iter().map(|t| t.map(|t| t.id));
        if !ids_before.eq(ids_after) {
            moved = true;
        }
        slid.cells[r] = new_row;
    }

    MoveOutcome {
        grid: slid.rotated_left(4 - turns),
        score,
        moved,
    }
}

/// Full grid with no equal orthogonal neighbours
pub fn is_game_over(grid: &Grid) -> bool {
    if !grid.empty_cells().is_empty() {
        return false;
    }

    let value = |r: usize, c: usize| grid.cells[r][c].map(|t| t.value);
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if c + 1 < GRID_SIZE && value(r, c) == value(r, c + 1) {
                return false;
            }
            if r + 1 < GRID_SIZE && value(r, c) == value(r + 1, c) {
                return false;
            }
        }
    }
    true
}

pub fn has_tile(grid: &Grid, value: u32) -> bool {
    grid.tiles().any(|(_, _, t)| t.value == value)
}
