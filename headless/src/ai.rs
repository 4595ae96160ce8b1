//! Predictive paddle controller for unattended runs
//!
//! Strategy:
//! 1. If the ball is moving towards us, predict the intersection y at
//!    our paddle face and move the paddle centre there.
//! 2. If the ball is moving away, drift back to the field centre to
//!    cover the maximum area.

use pong_core::{Direction, Session, Side};

pub fn paddle_dir(session: &Session, side: Side) -> Option<Direction> {
    let ball = session.ball()?;
    let paddle = session.paddle(side)?;
    let field = session.field();
    let params = session.params();

    // Velocity in px/ms; headings are y-up, screen is y-down.
    let vx = ball.angle.cos() * ball.speed;
    let vy = -ball.angle.sin() * ball.speed;

    let towards_us = match side {
        Side::Left => vx < 0.0,
        Side::Right => vx > 0.0,
    };
    let paddle_mid = paddle.y + paddle.height / 2.0;

    let target_y = if towards_us {
        let face_x = match side {
            Side::Left => paddle.x + paddle.width,
            Side::Right => paddle.x,
        };
        // towards_us guarantees vx is nonzero with a known sign
        let vx = vx.signum() * vx.abs().max(0.001);
        let time_to_reach = (face_x - ball.pos.x) / vx;
        let predicted_y = ball.pos.y + vy * time_to_reach;
        fold(predicted_y, ball.radius, field.height - ball.radius)
    } else {
        field.height / 2.0
    };

    let diff = target_y - paddle_mid;
    if diff.abs() <= params.paddle_speed {
        return None;
    }
    if diff > 0.0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

// Reflect a straight-line prediction back into the band the ball
// actually bounces within.
fn fold(y: f32, low: f32, high: f32) -> f32 {
    let span = 2.0 * (high - low);
    let mut offset = (y - low).rem_euclid(span);
    if offset > high - low {
        offset = span - offset;
    }
    low + offset
}
