//! Variable timestep simulation tick
//!
//! Movement is scaled by elapsed time against the reference frame, so the
//! ball covers the same distance per second at any frame rate.

use glam::Vec2;
use rand::Rng;

use super::collision::{WallContact, ball_brick_overlap, ball_paddle_overlap, paddle_bounce, resolve_walls};
use super::state::{Brick, BrickKind, BrickPhase, BrickState};
use crate::consts::brick::*;
use crate::time_scale;

/// Advance the game by `dt_ms` milliseconds of real time
pub fn update(state: &mut BrickState, dt_ms: f32) {
    if state.phase != BrickPhase::Playing {
        return;
    }

    let scale = time_scale(dt_ms);
    state.paddle.clamp();

    for ball in state.balls.iter_mut().filter(|b| b.active) {
        ball.pos += ball.vel * scale;

        if resolve_walls(ball) == WallContact::Floor {
            ball.active = false;
            continue;
        }

        if ball_paddle_overlap(ball, &state.paddle) {
            ball.vel = paddle_bounce(ball, &state.paddle);
        }

        // At most one brick per ball per tick
        if let Some(brick) = state
            .bricks
            .iter_mut()
            .find(|b| b.visible && ball_brick_overlap(ball.pos, ball.radius, b))
        {
            ball.vel.y = -ball.vel.y;
            if brick.kind != BrickKind::Steel {
                brick.visible = false;
                state.score += brick.value;
            }
        }
    }

    state.balls.retain(|b| b.active);

    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        if state.lives > 0 {
            log::info!("Brick Rush: ball lost, {} lives left", state.lives);
            state.respawn_ball();
        } else {
            state.phase = BrickPhase::GameOver;
            log::info!(
                "Brick Rush: game over at level {}, score {}",
                state.level,
                state.score
            );
        }
    }

    if state.phase == BrickPhase::Playing && state.remaining_bricks() == 0 {
        state.level += 1;
        state.bricks = generate_level(state.level, &mut state.rng);
        state.respawn_ball();
        log::info!(
            "Brick Rush: level {} ({} bricks)",
            state.level,
            state.bricks.len()
        );
    }

    if state.score > state.best_score {
        state.best_score = state.score;
    }
}

/// Center the paddle on a pointer x position, clamped to the field
pub fn move_paddle(state: &mut BrickState, pointer_x: f32) {
    state.paddle.center_on(pointer_x);
}

/// Generate the brick layout for a level
///
/// Each grid slot holds a brick with 90% probability. Values scale with
/// the level; hue follows the column.
pub fn generate_level<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);

    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            if !rng.random_bool(BRICK_SPAWN_CHANCE) {
                continue;
            }

            let kind = if rng.random_bool(STEEL_CHANCE) {
                BrickKind::Steel
            } else if rng.random_bool(POWERUP_CHANCE) {
                BrickKind::PowerUp
            } else {
                BrickKind::Normal
            };

            let origin = brick_origin(row, col);
            bricks.push(Brick {
                x: origin.x,
                y: origin.y,
                width: BRICK_WIDTH,
                height: BRICK_HEIGHT,
                value: BRICK_BASE_VALUE * u64::from(level),
                kind,
                hue: match kind {
                    BrickKind::Steel => None,
                    _ => Some(col as u16 * BRICK_HUE_STEP),
                },
                visible: true,
            });
        }
    }

    bricks
}

/// Top-left corner of a grid slot
pub fn brick_origin(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_PADDING,
        row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_PADDING + BRICK_TOP_OFFSET,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::REFERENCE_FRAME_MS;
    use crate::sim::brick::Ball;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FRAME: f32 = REFERENCE_FRAME_MS;

    fn brick_at(x: f32, y: f32, kind: BrickKind) -> Brick {
        Brick {
            x,
            y,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            value: 10,
            kind,
            hue: Some(0),
            visible: true,
        }
    }

    /// Playing state with one far-away brick so the level doesn't clear
    fn playing_state() -> BrickState {
        let mut state = BrickState::new(12345, 0);
        state.start();
        state.bricks = vec![brick_at(10.0, 60.0, BrickKind::Normal)];
        state
    }

    fn single_ball(state: &mut BrickState, pos: Vec2, vel: Vec2) {
        state.balls = vec![Ball {
            pos,
            vel,
            radius: BALL_RADIUS,
            active: true,
        }];
    }

    #[test]
    fn test_start_generates_level_one() {
        let mut state = BrickState::new(1, 0);
        assert_eq!(state.phase, BrickPhase::Menu);
        state.start();
        assert_eq!(state.phase, BrickPhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.balls.len(), 1);
        assert!(!state.bricks.is_empty());
    }

    #[test]
    fn test_update_ignored_outside_playing() {
        let mut state = BrickState::new(1, 0);
        let before = state.balls.clone();
        update(&mut state, FRAME);
        assert_eq!(state.balls, before);

        let mut state = playing_state();
        state.pause();
        let before = state.balls.clone();
        update(&mut state, FRAME);
        assert_eq!(state.balls, before);
        state.resume();
        update(&mut state, FRAME);
        assert_ne!(state.balls, before);
    }

    #[test]
    fn test_time_scale_moves_proportionally() {
        let mut state = playing_state();
        single_ball(&mut state, Vec2::new(400.0, 300.0), Vec2::new(4.0, -4.0));
        update(&mut state, FRAME * 2.0);
        let ball = &state.balls[0];
        assert!((ball.pos.x - 408.0).abs() < 1e-3);
        assert!((ball.pos.y - 292.0).abs() < 1e-3);
    }

    #[test]
    fn test_falling_ball_bounces_up_off_paddle() {
        let mut state = playing_state();
        let center = state.paddle.center();
        single_ball(&mut state, Vec2::new(center, 566.0), Vec2::new(0.0, 4.0));
        update(&mut state, FRAME);
        let ball = &state.balls[0];
        assert!(ball.vel.y < 0.0);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn test_paddle_forces_upward_even_when_rising() {
        let mut state = playing_state();
        let center = state.paddle.center();
        single_ball(&mut state, Vec2::new(center + 10.0, 580.0), Vec2::new(0.0, -3.0));
        update(&mut state, FRAME);
        let ball = &state.balls[0];
        assert_eq!(ball.vel.y, -3.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_lost_ball_costs_a_life() {
        let mut state = playing_state();
        single_ball(&mut state, Vec2::new(20.0, CANVAS_HEIGHT - 5.0), Vec2::new(0.0, 4.0));
        update(&mut state, FRAME);
        assert_eq!(state.lives, START_LIVES - 1);
        assert_eq!(state.balls, vec![Ball::new()]);
        assert_eq!(state.phase, BrickPhase::Playing);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = playing_state();
        state.lives = 1;
        single_ball(&mut state, Vec2::new(20.0, CANVAS_HEIGHT - 5.0), Vec2::new(0.0, 4.0));
        update(&mut state, FRAME);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, BrickPhase::GameOver);
        assert!(state.balls.is_empty());

        // Stays over until restarted
        update(&mut state, FRAME);
        assert_eq!(state.phase, BrickPhase::GameOver);
        state.start();
        assert_eq!(state.phase, BrickPhase::Playing);
    }

    #[test]
    fn test_brick_hit_scores_and_hides() {
        let mut state = playing_state();
        state.bricks.push(brick_at(300.0, 200.0, BrickKind::PowerUp));
        single_ball(&mut state, Vec2::new(330.0, 236.0), Vec2::new(0.0, -4.0));
        update(&mut state, FRAME);
        assert!(!state.bricks[1].visible);
        assert_eq!(state.score, 10);
        assert_eq!(state.best_score, 10);
        assert!(state.balls[0].vel.y > 0.0);
        assert!(state.power_ups.is_empty());
    }

    #[test]
    fn test_steel_brick_survives() {
        let mut state = playing_state();
        state.bricks.push(brick_at(300.0, 200.0, BrickKind::Steel));
        single_ball(&mut state, Vec2::new(330.0, 236.0), Vec2::new(0.0, -4.0));
        update(&mut state, FRAME);
        assert!(state.bricks[1].visible);
        assert_eq!(state.score, 0);
        assert!(state.balls[0].vel.y > 0.0);
    }

    #[test]
    fn test_one_brick_per_tick() {
        let mut state = playing_state();
        state.bricks.push(brick_at(300.0, 200.0, BrickKind::Normal));
        state.bricks.push(brick_at(300.0 + BRICK_WIDTH, 200.0, BrickKind::Normal));
        single_ball(&mut state, Vec2::new(300.0 + BRICK_WIDTH, 236.0), Vec2::new(0.0, -4.0));
        update(&mut state, FRAME);
        let hidden = state.bricks.iter().filter(|b| !b.visible).count();
        assert_eq!(hidden, 1);
    }

    #[test]
    fn test_clearing_level_advances() {
        let mut state = playing_state();
        state.bricks = vec![
            brick_at(300.0, 200.0, BrickKind::Normal),
            brick_at(500.0, 200.0, BrickKind::Steel),
        ];
        single_ball(&mut state, Vec2::new(330.0, 236.0), Vec2::new(0.0, -4.0));
        update(&mut state, FRAME);
        assert_eq!(state.level, 2);
        assert_eq!(state.balls, vec![Ball::new()]);
        assert!(state.bricks.iter().all(|b| b.visible && b.value == 20));
    }

    #[test]
    fn test_move_paddle_clamps() {
        let mut state = playing_state();
        move_paddle(&mut state, -500.0);
        assert_eq!(state.paddle.x, 0.0);
        move_paddle(&mut state, 5000.0);
        assert_eq!(state.paddle.x, CANVAS_WIDTH - PADDLE_WIDTH);
        move_paddle(&mut state, 400.0);
        assert_eq!(state.paddle.center(), 400.0);
    }

    #[test]
    fn test_generate_level_layout() {
        let mut rng = Pcg32::seed_from_u64(77);
        let bricks = generate_level(3, &mut rng);
        assert!(bricks.len() <= BRICK_ROWS * BRICK_COLS);
        for brick in &bricks {
            assert_eq!(brick.value, 30);
            assert!(brick.visible);
            assert_eq!(brick.hue.is_none(), brick.kind == BrickKind::Steel);
            assert!(brick.x >= 0.0 && brick.x + brick.width <= CANVAS_WIDTH + 1e-3);
        }

        let mut rng_a = Pcg32::seed_from_u64(5);
        let mut rng_b = Pcg32::seed_from_u64(5);
        assert_eq!(generate_level(1, &mut rng_a), generate_level(1, &mut rng_b));
    }

    #[test]
    fn test_generate_level_density() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let total: usize = (0..50).map(|_| generate_level(1, &mut rng).len()).sum();
        // 90% of 60 slots on average
        let mean = total as f32 / 50.0;
        assert!((50.0..=58.0).contains(&mean), "mean = {}", mean);
    }
}
