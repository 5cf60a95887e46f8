//! Snake step timing and movement

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;

use super::state::{Food, FoodKind, SnakeState, SnakeStatus};
use crate::consts::snake::*;

/// Accumulate elapsed time and take at most one step when the interval is reached
pub fn update(state: &mut SnakeState, dt_ms: f32) {
    if state.status != SnakeStatus::Playing {
        return;
    }

    state.elapsed_ms += dt_ms;
    if state.elapsed_ms >= state.interval_ms {
        // Keep the remainder
        state.elapsed_ms -= state.interval_ms;
        step(state);
    }
}

/// Move the snake one cell
pub fn step(state: &mut SnakeState) {
    let current = state.direction;
    let mut next = current;
    // First non-reverse request wins; the rest of the queue is dropped
    while let Some(candidate) = state.queue.pop_front() {
        if candidate != current.opposite() {
            next = candidate;
            break;
        }
    }
    state.queue.clear();
    state.direction = next;

    let head = state.head();
    let new_head = head + next.delta();

    if !in_bounds(new_head) {
        state.status = SnakeStatus::GameOver;
        log::info!("Snake: hit the wall, score {}", state.score);
        return;
    }

    let eating = new_head == state.food.pos;
    if state.snake.contains(&new_head) {
        // The tail vacates its cell this step unless the snake grows
        let is_tail = state.snake.back() == Some(&new_head);
        if !is_tail || eating {
            state.status = SnakeStatus::GameOver;
            log::info!("Snake: bit itself, score {}", state.score);
            return;
        }
    }

    state.snake.push_front(new_head);

    if eating {
        state.score += state.food.kind.points();
        if state.score > state.best_score {
            state.best_score = state.score;
        }
        state.interval_ms = (state.interval_ms - INTERVAL_DECREMENT_MS).max(MIN_INTERVAL_MS);
        match spawn_food(&state.snake, &mut state.rng) {
            Some(food) => state.food = food,
            None => {
                state.status = SnakeStatus::GameOver;
                log::info!("Snake: board filled, score {}", state.score);
            }
        }
    } else {
        state.snake.pop_back();
    }
}

pub fn in_bounds(cell: IVec2) -> bool {
    (0..GRID_SIZE).contains(&cell.x) && (0..GRID_SIZE).contains(&cell.y)
}

/// Place food uniformly on a cell the snake doesn't occupy
///
/// Returns `None` when the snake fills the board.
pub fn spawn_food<R: Rng + ?Sized>(snake: &VecDeque<IVec2>, rng: &mut R) -> Option<Food> {
    let free: Vec<IVec2> = (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| IVec2::new(x, y)))
        .filter(|cell| !snake.contains(cell))
        .collect();

    if free.is_empty() {
        return None;
    }

    let pos = free[rng.random_range(0..free.len())];
    let kind = if rng.random_bool(GOLD_FOOD_CHANCE) {
        FoodKind::Gold
    } else {
        FoodKind::Normal
    };
    log::debug!("Snake: {:?} food at ({}, {})", kind, pos.x, pos.y);
    Some(Food { pos, kind })
}
