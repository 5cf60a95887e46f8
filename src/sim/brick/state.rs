//! Brick Rush game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::brick::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickPhase {
    /// Not started yet
    Menu,
    /// Active gameplay
    Playing,
    /// Halted by the player
    Paused,
    /// Out of lives
    GameOver,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per reference frame
    pub vel: Vec2,
    pub radius: f32,
    /// False once the ball drops below the field
    pub active: bool,
}

impl Ball {
    /// A ball at the serve position with the launch velocity
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            radius: BALL_RADIUS,
            active: true,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle. Its vertical position is fixed near the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: CANVAS_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Top of the collision band
    #[inline]
    pub fn top(&self) -> f32 {
        CANVAS_HEIGHT - self.height - PADDLE_BOTTOM_MARGIN
    }

    /// Bottom of the collision band
    #[inline]
    pub fn bottom(&self) -> f32 {
        CANVAS_HEIGHT - PADDLE_BOTTOM_MARGIN
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Keep the paddle inside the field
    pub fn clamp(&mut self) {
        self.x = self.x.clamp(0.0, (CANVAS_WIDTH - self.width).max(0.0));
    }

    /// Center the paddle on a pointer position
    pub fn center_on(&mut self, pointer_x: f32) {
        self.x = pointer_x - self.width / 2.0;
        self.clamp();
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickKind {
    #[default]
    Normal,
    /// Cannot be destroyed, doesn't count for level clear
    Steel,
    /// Flagged for a power-up drop; no drop mechanics exist, so it plays as Normal
    PowerUp,
}

impl BrickKind {
    /// Returns true if this kind must be destroyed to clear the level
    pub fn counts_for_clear(self) -> bool {
        self != BrickKind::Steel
    }
}

/// A brick entity (axis-aligned rectangle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Points awarded when destroyed
    pub value: u64,
    pub kind: BrickKind,
    /// HSL hue in degrees; `None` renders as steel grey
    pub hue: Option<u16>,
    pub visible: bool,
}

impl Brick {
    /// Still blocks the level from being cleared
    pub fn is_remaining(&self) -> bool {
        self.visible && self.kind.counts_for_clear()
    }
}

/// Falling power-up kinds (rendered by the client, never spawned by the sim)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    ExtraBall,
    WidePaddle,
}

/// A falling power-up capsule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub active: bool,
}

/// Complete Brick Rush state
#[derive(Debug, Clone, Serialize)]
pub struct BrickState {
    pub balls: Vec<Ball>,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
    pub power_ups: Vec<PowerUp>,
    pub score: u64,
    pub best_score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    pub phase: BrickPhase,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl BrickState {
    /// Create a state sitting on the menu
    pub fn new(seed: u64, best_score: u64) -> Self {
        Self {
            balls: vec![Ball::new()],
            paddle: Paddle::default(),
            bricks: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            best_score,
            lives: START_LIVES,
            level: 1,
            phase: BrickPhase::Menu,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a new run at level 1
    pub fn start(&mut self) {
        self.balls = vec![Ball::new()];
        self.paddle = Paddle::default();
        self.bricks = super::tick::generate_level(1, &mut self.rng);
        self.power_ups.clear();
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.phase = BrickPhase::Playing;
        log::info!("Brick Rush: new game ({} bricks)", self.bricks.len());
    }

    pub fn pause(&mut self) {
        if self.phase == BrickPhase::Playing {
            self.phase = BrickPhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == BrickPhase::Paused {
            self.phase = BrickPhase::Playing;
        }
    }

    /// Bricks left before the level clears
    pub fn remaining_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_remaining()).count()
    }

    /// Replace balls with a single serve ball
    pub fn respawn_ball(&mut self) {
        self.balls.clear();
        self.balls.push(Ball::new());
    }
}
