//! Collision detection and response for the rectangular playfield
//!
//! Balls are tested by their bounding box against walls, the paddle band and
//! bricks. Response is a velocity sign flip plus a position clamp.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};
use crate::consts::brick::*;

/// Which boundary a ball touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    Side,
    Top,
    /// Dropped below the field - the ball is lost
    Floor,
}

/// Reflect off the side and top walls, report a floor exit
///
/// Sides and top are resolved independently so a corner hit flips both axes.
pub fn resolve_walls(ball: &mut Ball) -> WallContact {
    let mut contact = WallContact::None;
    let r = ball.radius;

    if ball.pos.x - r < 0.0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = r;
        contact = WallContact::Side;
    } else if ball.pos.x + r > CANVAS_WIDTH {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = CANVAS_WIDTH - r;
        contact = WallContact::Side;
    }

    if ball.pos.y - r < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        contact = WallContact::Top;
    } else if ball.pos.y + r > CANVAS_HEIGHT {
        contact = WallContact::Floor;
    }

    contact
}

/// Ball overlaps the paddle band and its center is over the paddle
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius >= paddle.top()
        && ball.pos.y - ball.radius <= paddle.bottom()
        && ball.pos.x >= paddle.x
        && ball.pos.x <= paddle.x + paddle.width
}

/// Paddle bounce: always upward, angle from the hit offset
///
/// Returns the new velocity.
pub fn paddle_bounce(ball: &Ball, paddle: &Paddle) -> Vec2 {
    let offset = ball.pos.x - paddle.center();
    Vec2::new(offset * DEFLECTION_FACTOR, -ball.vel.y.abs())
}

/// Bounding-box overlap between a ball and a brick (strict inequalities)
pub fn ball_brick_overlap(pos: Vec2, radius: f32, brick: &Brick) -> bool {
    pos.x + radius > brick.x
        && pos.x - radius < brick.x + brick.width
        && pos.y + radius > brick.y
        && pos.y - radius < brick.y + brick.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::brick::BrickKind;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: BALL_RADIUS,
            active: true,
        }
    }

    #[test]
    fn test_left_wall_reflects_and_clamps() {
        let mut ball = ball_at(3.0, 300.0, -4.0, 2.0);
        assert_eq!(resolve_walls(&mut ball), WallContact::Side);
        assert_eq!(ball.pos.x, BALL_RADIUS);
        assert!(ball.vel.x > 0.0);
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_right_wall_reflects_and_clamps() {
        let mut ball = ball_at(CANVAS_WIDTH - 2.0, 300.0, 4.0, 2.0);
        assert_eq!(resolve_walls(&mut ball), WallContact::Side);
        assert_eq!(ball.pos.x, CANVAS_WIDTH - BALL_RADIUS);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_top_wall_reflects() {
        let mut ball = ball_at(400.0, 4.0, 1.0, -4.0);
        assert_eq!(resolve_walls(&mut ball), WallContact::Top);
        assert_eq!(ball.pos.y, BALL_RADIUS);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_floor_is_not_a_wall() {
        let mut ball = ball_at(400.0, CANVAS_HEIGHT - 2.0, 0.0, 4.0);
        assert_eq!(resolve_walls(&mut ball), WallContact::Floor);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_paddle_bounce_angle() {
        let paddle = Paddle::default();
        let ball = ball_at(paddle.center() + 20.0, paddle.top(), 0.0, 4.0);
        assert!(ball_paddle_overlap(&ball, &paddle));
        let vel = paddle_bounce(&ball, &paddle);
        assert!((vel.x - 20.0 * DEFLECTION_FACTOR).abs() < 1e-5);
        assert_eq!(vel.y, -4.0);
    }

    #[test]
    fn test_paddle_miss_outside_width() {
        let paddle = Paddle::default();
        let ball = ball_at(paddle.x - 1.0, paddle.top(), 0.0, 4.0);
        assert!(!ball_paddle_overlap(&ball, &paddle));
    }

    #[test]
    fn test_brick_overlap() {
        let brick = Brick {
            x: 100.0,
            y: 100.0,
            width: 69.0,
            height: 30.0,
            value: 10,
            kind: BrickKind::Normal,
            hue: Some(0),
            visible: true,
        };
        assert!(ball_brick_overlap(Vec2::new(130.0, 135.0), 8.0, &brick));
        assert!(!ball_brick_overlap(Vec2::new(130.0, 138.0), 8.0, &brick));
        assert!(!ball_brick_overlap(Vec2::new(92.0, 110.0), 8.0, &brick));
    }
}
