//! Deterministic two-player paddle game simulation.
//!
//! Pure logic crate with no I/O: drivers feed elapsed time and paddle
//! input in, and read entity positions, events, and sound cues out.
//! All coordinates are f32 pixels with the origin at the top-left of
//! the field and y growing downward. Ball headings are radians in
//! `[0, TAU)` measured counter-clockwise from the positive x axis, so
//! a heading of 0 travels right and `PI / 2` travels up the screen.

pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use resources::*;
pub use session::*;

use glam::Vec2;
use hecs::{Entity, World};

/// Spawn a paddle for one side with its counter at the mode's starting value
pub fn create_paddle(
    world: &mut World,
    side: Side,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    params: &GameParams,
) -> Entity {
    world.spawn((Paddle {
        side,
        x,
        y,
        width,
        height,
        counter: params.starting_counter(),
    },))
}

/// Spawn the ball
pub fn create_ball(world: &mut World, pos: Vec2, radius: f32, angle: f32, speed: f32) -> Entity {
    world.spawn((Ball {
        pos,
        radius,
        angle,
        speed,
    },))
}

/// Advance the simulation by one frame.
///
/// Clears last frame's events, applies queued paddle moves, then sweeps
/// the ball through every collision its displacement covers. When the
/// rally ends at a goal the out-of-bounds position is never committed;
/// the ball is re-served from the centre before scoring is applied.
pub fn advance(
    world: &mut World,
    time: &Time,
    field: &Field,
    params: &GameParams,
    events: &mut Events,
    rng: &mut GameRng,
    inputs: &mut InputQueue,
) -> Outcome {
    events.clear();

    let moves: Vec<(Side, Direction)> = inputs.moves.drain(..).collect();
    for (side, direction) in moves {
        systems::move_paddle(world, field, params, events, side, direction);
    }

    // A malformed clock (NaN, infinite, backwards) freezes the ball for
    // one frame instead of teleporting it.
    let dt = if time.dt.is_finite() && time.dt > 0.0 {
        time.dt
    } else {
        0.0
    };

    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }
    let (Some(left), Some(right)) = (left, right) else {
        return Outcome::Continue;
    };
    let Some(mut ball) = world.query::<&Ball>().iter().next().map(|(_e, b)| *b) else {
        return Outcome::Continue;
    };

    let distance = dt * ball.speed;
    let mut shift = Vec2::new(
        ball.angle.cos() * distance,
        -ball.angle.sin() * distance,
    );

    match systems::resolve_shift(&mut ball, &mut shift, &left, &right, field, params, events) {
        None => {
            ball.pos += shift;
            for (_entity, stored) in world.query_mut::<&mut Ball>() {
                *stored = ball;
            }
            if dt > 0.0 {
                events.moved.push(ObjectKind::Ball);
            }
            // Pass-through goal crossings in free play score without
            // ending the rally.
            let crossings: Vec<Side> = events.goal_bounces.clone();
            for side in crossings {
                systems::apply_miss(world, params, side, events);
            }
            Outcome::Continue
        }
        Some(side) => {
            systems::reset_rally(world, field, params, events, rng, false);
            if let Some(loser) = systems::apply_miss(world, params, side, events) {
                return Outcome::Loss { side: loser };
            }
            events.missed = Some(side);
            Outcome::Miss {
                side,
                pause: systems::should_pause(params),
            }
        }
    }
}
