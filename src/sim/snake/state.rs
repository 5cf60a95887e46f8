//! Snake game state
//!
//! The direction queue and the elapsed-time accumulator live here as plain
//! fields, so `tick::update` is a function of (state, elapsed time).

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::snake::*;
use crate::sim::Direction;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakeStatus {
    Menu,
    Playing,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodKind {
    Normal,
    Gold,
}

impl FoodKind {
    pub fn points(self) -> u64 {
        match self {
            FoodKind::Normal => NORMAL_FOOD_POINTS,
            FoodKind::Gold => GOLD_FOOD_POINTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub pos: IVec2,
    pub kind: FoodKind,
}

/// Starting body, head first, heading up
pub fn initial_snake() -> VecDeque<IVec2> {
    VecDeque::from([IVec2::new(10, 10), IVec2::new(10, 11), IVec2::new(10, 12)])
}

/// Complete Snake state
#[derive(Debug, Clone, Serialize)]
pub struct SnakeState {
    /// Body segments, head first
    pub snake: VecDeque<IVec2>,
    pub food: Food,
    /// Direction of the last step
    pub direction: Direction,
    pub score: u64,
    pub best_score: u64,
    pub status: SnakeStatus,
    /// Time between steps; shrinks as food is eaten
    pub interval_ms: f32,
    /// Pending direction changes, oldest first
    #[serde(skip)]
    pub(crate) queue: VecDeque<Direction>,
    /// Time accumulated toward the next step
    #[serde(skip)]
    pub(crate) elapsed_ms: f32,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl SnakeState {
    /// Create a state sitting on the menu
    pub fn new(seed: u64, best_score: u64) -> Self {
        Self {
            snake: initial_snake(),
            food: Food {
                pos: IVec2::new(5, 5),
                kind: FoodKind::Normal,
            },
            direction: Direction::Up,
            score: 0,
            best_score,
            status: SnakeStatus::Menu,
            interval_ms: INITIAL_INTERVAL_MS,
            queue: VecDeque::new(),
            elapsed_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset to the starting snake and begin playing
    pub fn start(&mut self) {
        self.snake = initial_snake();
        self.direction = Direction::Up;
        self.queue.clear();
        self.score = 0;
        self.interval_ms = INITIAL_INTERVAL_MS;
        self.elapsed_ms = 0.0;
        self.status = SnakeStatus::Playing;
        match super::tick::spawn_food(&self.snake, &mut self.rng) {
            Some(food) => self.food = food,
            None => self.status = SnakeStatus::GameOver,
        }
        log::info!("Snake: new game");
    }

    /// Queue a direction change for an upcoming step
    pub fn change_direction(&mut self, direction: Direction) {
        self.queue.push_back(direction);
    }

    pub fn pause(&mut self) {
        if self.status == SnakeStatus::Playing {
            self.status = SnakeStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == SnakeStatus::Paused {
            self.status = SnakeStatus::Playing;
        }
    }

    pub fn quit_to_menu(&mut self) {
        self.status = SnakeStatus::Menu;
    }

    pub fn head(&self) -> IVec2 {
        self.snake.front().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn pending_directions(&self) -> usize {
        self.queue.len()
    }
}
