//! Rally reset and serve angle generation

use hecs::World;
use rand::Rng;
use std::f32::consts::PI;

use crate::components::{Ball, ObjectKind, Paddle};
use crate::config::GameParams;
use crate::field::Field;
use crate::resources::{Events, GameRng};

use super::scoring;

/// Generate a serve angle: roughly rightward or roughly leftward, with a
/// random vertical tilt of up to 45 degrees either way, so a serve is
/// never close to vertical
pub fn serve_angle(rng: &mut GameRng) -> f32 {
    let flip: f32 = rng.0.gen();
    let tilt: f32 = rng.0.gen();
    (flip.round() + (tilt - 0.5) / 2.0) * PI
}

/// Reposition the ball to the field center with a fresh serve angle and
/// both paddles to the vertical center; `hard` also resets the counters
pub fn reset_rally(
    world: &mut World,
    field: &Field,
    params: &GameParams,
    events: &mut Events,
    rng: &mut GameRng,
    hard: bool,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = field.paddle_center_y(paddle.height);
        events.moved.push(paddle.side.paddle_object());
    }
    let angle = serve_angle(rng);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = field.center();
        ball.angle = angle;
        events.moved.push(ObjectKind::Ball);
    }
    if hard {
        scoring::reset_counters(world, params, events);
    }
}
