//! Idle/demo autopilot
//!
//! Picks an input for the current state of each game. Used by the native
//! demo runner; the browser can drive the same functions for an attract loop.

use glam::IVec2;

use crate::arcade::ActiveGame;
use crate::sim::{BrickPhase, BrickState, Direction, MergeSession, SnakeState, SnakeStatus, snake};

/// One frame of autopilot input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoInput {
    /// Pointer x for the paddle
    Paddle(f32),
    /// Directional press
    Press(Direction),
}

/// Choose an input for whichever game is active
///
/// Returns `None` when the game isn't running or there is nothing to do.
pub fn pick_input(game: &ActiveGame) -> Option<AutoInput> {
    match game {
        ActiveGame::BrickRush(s) if s.phase == BrickPhase::Playing => {
            brick_target(s).map(AutoInput::Paddle)
        }
        ActiveGame::Merge1024(s) if s.accepts_moves() => merge_direction(s).map(AutoInput::Press),
        // One queued turn per step is enough
        ActiveGame::Snake(s) if s.status == SnakeStatus::Playing && s.pending_directions() == 0 => {
            Some(AutoInput::Press(snake_direction(s)))
        }
        _ => None,
    }
}

/// Pointer x that keeps the paddle under the most dangerous ball
///
/// The most dangerous ball is the lowest one that is falling; with none
/// falling, the lowest ball overall.
pub fn brick_target(state: &BrickState) -> Option<f32> {
    let lowest = |falling: bool| {
        state
            .balls
            .iter()
            .filter(|b| b.active && (!falling || b.vel.y > 0.0))
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    };
    lowest(true).or_else(|| lowest(false)).map(|b| b.pos.x)
}

/// Greedy turn toward the food that avoids walls and the body
///
/// Keeps the current direction if no move is safe.
pub fn snake_direction(state: &SnakeState) -> Direction {
    let head = state.head();
    let tail = state.snake.back().copied();
    let food = state.food.pos;

    let safe = |cell: IVec2| {
        snake::in_bounds(cell)
            && (!state.snake.contains(&cell) || (Some(cell) == tail && cell != food))
    };

    Direction::ALL
        .into_iter()
        .filter(|&d| d != state.direction.opposite())
        .filter(|&d| safe(head + d.delta()))
        .min_by_key(|&d| {
            let next = head + d.delta();
            // Prefer going straight on ties
            let turn = i32::from(d != state.direction);
            ((next - food).abs().element_sum(), turn)
        })
        .unwrap_or(state.direction)
}

/// Corner strategy: first legal move in a fixed preference order
pub fn merge_direction(session: &MergeSession) -> Option<Direction> {
    const PREFERENCE: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];
    PREFERENCE.into_iter().find(|&d| session.would_move(d))
}
