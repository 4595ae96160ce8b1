//! The bounce-resolution loop
//!
//! A single elapsed-time step can cross several boundaries (a paddle edge
//! and then the far wall, at high speed or on a small field). The loop
//! keeps reflecting the remaining displacement about whichever boundary it
//! crosses until a full pass fires nothing, so multi-bounce frames resolve
//! deterministically and without positional drift.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::components::{Ball, Paddle, Side};
use crate::config::{GameParams, Params};
use crate::field::Field;
use crate::resources::Events;

/// Sign with a zero case, like `Math.sign`
fn sign(v: f32) -> f32 {
    if v == 0.0 {
        0.0
    } else {
        v.signum()
    }
}

/// Reflect a proposed shift about a boundary, if it crosses it
///
/// Returns the reflected remainder `2*distance - shift` when the shift
/// heads toward the boundary and overshoots it; `None` otherwise. The
/// remainder is strictly smaller in magnitude than the input whenever the
/// boundary is strictly ahead, which is what makes the loop terminate.
fn shift_past(current: f32, bound: f32, shift: f32) -> Option<f32> {
    let distance = bound - current;
    if sign(shift) == sign(distance) && shift.abs() > distance.abs() {
        Some(2.0 * distance - shift)
    } else {
        None
    }
}

/// Outgoing angle after a paddle hit
///
/// `toward` is the sign of `cos(angle)` before the hit; `adjustment` is
/// the normalized offset of the hit from the paddle center, in [-0.5, 0.5].
/// A center hit leaves horizontally; edge hits add up to 45 degrees of
/// vertical deflection.
pub fn deflected_angle(toward: f32, adjustment: f32) -> f32 {
    FRAC_PI_2 + toward * (FRAC_PI_2 + adjustment * FRAC_PI_4)
}

/// Resolve a frame's displacement against walls, paddles and goal lines
///
/// Mutates the ball's angle in place and reduces `shift` to the final
/// post-reflection displacement; the caller commits `pos += shift`.
/// Returns `Some(side)` when a terminal goal crossing ends the rally, in
/// which case `shift` must not be committed. Free-play pass-through goal
/// crossings are recorded in `events.goal_bounces` and keep resolving.
pub fn resolve_shift(
    ball: &mut Ball,
    shift: &mut Vec2,
    left: &Paddle,
    right: &Paddle,
    field: &Field,
    params: &GameParams,
    events: &mut Events,
) -> Option<Side> {
    let mut passes = 0u32;

    loop {
        let mut settled = true;

        // Top wall, then bottom wall
        if let Some(reflected) = shift_past(ball.pos.y, ball.radius, shift.y) {
            ball.angle = TAU - ball.angle;
            shift.y = reflected;
            settled = false;
            events.ball_hit_wall = true;
        }
        if let Some(reflected) = shift_past(ball.pos.y, field.height - ball.radius, shift.y) {
            ball.angle = TAU - ball.angle;
            shift.y = reflected;
            settled = false;
            events.ball_hit_wall = true;
        }

        // Paddle plane on whichever side the shift is heading toward
        {
            let (paddle, x_distance) = if shift.x < 0.0 {
                (
                    left,
                    ball.pos.x - ball.radius - left.x - left.width,
                )
            } else {
                (right, right.x - ball.pos.x - ball.radius)
            };
            let y_distance = ball.angle.tan() * x_distance;
            let cross_y = ball.pos.y + y_distance;
            if shift.x.abs() > x_distance
                && paddle.y - ball.radius <= cross_y
                && paddle.y + paddle.height + ball.radius >= cross_y
            {
                shift.x = -shift.x - x_distance;
                shift.y -= y_distance;
                let adjustment = (cross_y - paddle.y - paddle.height / 2.0) / paddle.height;
                ball.angle = deflected_angle(sign(ball.angle.cos()), adjustment);
                settled = false;
                events.ball_hit_paddle = true;
            }
        }

        // Left goal line, then right goal line
        if let Some(reflected) = shift_past(ball.pos.x, ball.radius, shift.x) {
            if params.terminal_goal() {
                return Some(Side::Left);
            }
            ball.angle = (3.0 * PI - ball.angle).rem_euclid(TAU);
            shift.x = reflected;
            settled = false;
            events.goal_bounces.push(Side::Left);
        }
        if let Some(reflected) = shift_past(ball.pos.x, field.width - ball.radius, shift.x) {
            if params.terminal_goal() {
                return Some(Side::Right);
            }
            ball.angle = (3.0 * PI - ball.angle).rem_euclid(TAU);
            shift.x = reflected;
            settled = false;
            events.goal_bounces.push(Side::Right);
        }

        if settled {
            return None;
        }

        passes += 1;
        if passes >= Params::MAX_BOUNCE_PASSES {
            // Invariant violation: reflections stopped shrinking the
            // remaining shift. Recover instead of wedging the frame loop.
            log::warn!(
                "bounce resolution did not settle after {passes} passes; clamping ball into bounds"
            );
            ball.pos.x = ball.pos.x.clamp(ball.radius, field.width - ball.radius);
            ball.pos.y = ball.pos.y.clamp(ball.radius, field.height - ball.radius);
            *shift = Vec2::ZERO;
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use proptest::prelude::*;

    fn field() -> Field {
        Field::new(800.0, 600.0)
    }

    fn paddles(f: &Field) -> (Paddle, Paddle) {
        let left = Paddle::new(Side::Left, 15.0, 275.0, 8.0, 50.0, 3);
        let right = Paddle::new(Side::Right, f.width - 15.0 - 8.0, 275.0, 8.0, 50.0, 3);
        (left, right)
    }

    fn free_play() -> GameParams {
        GameParams {
            mode: Mode::Free {
                need_restart: false,
                has_counter: true,
            },
            ..GameParams::default()
        }
    }

    #[test]
    fn test_shift_past_reflects_overshoot() {
        // Heading up (negative) past the bound at 8 from y=20: distance -12
        assert_eq!(shift_past(20.0, 8.0, -20.0), Some(-4.0));
        // Not overshooting
        assert_eq!(shift_past(20.0, 8.0, -10.0), None);
        // Heading away
        assert_eq!(shift_past(20.0, 8.0, 10.0), None);
        // Already on the boundary: no crossing is reported
        assert_eq!(shift_past(8.0, 8.0, -5.0), None);
    }

    #[test]
    fn test_wall_bounce_flips_vertical_angle() {
        let f = field();
        let (left, right) = paddles(&f);
        let mut ball = Ball::new(Vec2::new(400.0, 20.0), 8.0, 1.0, 0.35);
        // Moving up: dy = -sin(1.0) * k < 0
        let mut shift = Vec2::new(10.0, -30.0);
        let mut events = Events::new();

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &GameParams::default(),
            &mut events,
        );

        assert_eq!(miss, None);
        assert!(events.ball_hit_wall);
        assert!((ball.angle - (TAU - 1.0)).abs() < 1e-6);
        // Overshoot reflected about y = 8: 2*(8-20) - (-30) = 6
        assert_eq!(shift.y, 6.0);
        assert!(f.contains_ball(ball.pos + shift, ball.radius));
    }

    #[test]
    fn test_double_wall_bounce_restores_angle() {
        let f = field();
        let (left, right) = paddles(&f);
        let start_angle = 0.7;
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), 8.0, start_angle, 0.35);
        let mut events = Events::new();

        for _ in 0..2 {
            // Aim straight at the top wall and back
            let mut shift = Vec2::new(0.0, -600.0);
            resolve_shift(
                &mut ball,
                &mut shift,
                &left,
                &right,
                &f,
                &GameParams::default(),
                &mut events,
            );
            ball.pos += shift;
        }

        let normalized = ball.angle.rem_euclid(TAU);
        assert!(
            (normalized - start_angle).abs() < 1e-5,
            "two bounces off the same wall should restore the angle, got {normalized}"
        );
    }

    #[test]
    fn test_deflected_angle_center_is_exactly_horizontal() {
        assert_eq!(deflected_angle(1.0, 0.0), FRAC_PI_2 + FRAC_PI_2);
        assert_eq!(deflected_angle(-1.0, 0.0), 0.0);
    }

    #[test]
    fn test_deflected_angle_edges_add_quarter_pi() {
        assert_eq!(deflected_angle(1.0, 0.5), FRAC_PI_2 + (FRAC_PI_2 + 0.5 * FRAC_PI_4));
        assert!((deflected_angle(1.0, 0.5) - (PI + FRAC_PI_4 / 2.0)).abs() < 1e-6);
        assert_eq!(
            deflected_angle(-1.0, -0.5),
            FRAC_PI_2 - (FRAC_PI_2 + -0.5 * FRAC_PI_4)
        );
    }

    #[test]
    fn test_paddle_center_hit_leaves_horizontally() {
        let f = field();
        let (left, right) = paddles(&f);
        // Rightward at the right paddle's vertical center; tan(0) = 0 keeps
        // the crossing offset exactly zero
        let mut ball = Ball::new(Vec2::new(700.0, 300.0), 8.0, 0.0, 0.35);
        let mut shift = Vec2::new(200.0, 0.0);
        let mut events = Events::new();

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &GameParams::default(),
            &mut events,
        );

        assert_eq!(miss, None);
        assert!(events.ball_hit_paddle);
        assert_eq!(ball.angle, PI, "center hit must leave exactly horizontally");
        assert!(shift.x < 0.0, "horizontal component reflected away from paddle");
    }

    #[test]
    fn test_paddle_edge_hit_deflects_quarter_pi() {
        let f = field();
        let (left, right) = paddles(&f);
        // Crossing exactly at the paddle's top edge: adjustment = -0.5
        let mut ball = Ball::new(Vec2::new(700.0, 275.0), 8.0, 0.0, 0.35);
        let mut shift = Vec2::new(200.0, 0.0);
        let mut events = Events::new();

        resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &GameParams::default(),
            &mut events,
        );

        assert!(events.ball_hit_paddle);
        assert_eq!(ball.angle, deflected_angle(1.0, -0.5));
    }

    #[test]
    fn test_paddle_missed_outside_vertical_band() {
        let f = field();
        let (left, right) = paddles(&f);
        // Way below the right paddle: crossing is outside the band, the
        // ball sails through to the goal line
        let mut ball = Ball::new(Vec2::new(700.0, 500.0), 8.0, 0.0, 0.35);
        let mut shift = Vec2::new(200.0, 0.0);
        let mut events = Events::new();

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &GameParams::default(),
            &mut events,
        );

        assert_eq!(miss, Some(Side::Right));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_terminal_left_goal_reports_left() {
        let f = field();
        let (left, right) = paddles(&f);
        let mut ball = Ball::new(Vec2::new(100.0, 500.0), 8.0, PI, 0.35);
        let mut shift = Vec2::new(-300.0, 0.0);
        let mut events = Events::new();
        let before = ball.pos;

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &GameParams::default(),
            &mut events,
        );

        assert_eq!(miss, Some(Side::Left));
        assert_eq!(ball.pos, before, "resolver never moves the ball itself");
    }

    #[test]
    fn test_free_play_goal_bounces_through() {
        let f = field();
        let (left, right) = paddles(&f);
        // Below the paddles so the paddle plane does not intercept
        let mut ball = Ball::new(Vec2::new(700.0, 500.0), 8.0, 0.0, 0.35);
        let mut shift = Vec2::new(200.0, 0.0);
        let mut events = Events::new();

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &free_play(),
            &mut events,
        );

        assert_eq!(miss, None);
        assert_eq!(events.goal_bounces, vec![Side::Right]);
        // angle 0 -> (3pi - 0) mod 2pi = pi
        assert!((ball.angle - PI).abs() < 1e-6);
        assert!(f.contains_ball(ball.pos + shift, ball.radius));
    }

    #[test]
    fn test_wall_resolved_before_goal_in_one_step() {
        // Scenario: one step crosses both the bottom wall and the right
        // goal. The wall must reflect first (loop order), then the goal
        // fires on the deflected trajectory; two reflections, still in
        // bounds afterwards.
        let f = field();
        let (left, right) = paddles(&f);
        let angle = -0.6f32; // down-right
        let mut ball = Ball::new(Vec2::new(700.0, 550.0), 8.0, angle, 0.35);
        let mut shift = Vec2::new(
            angle.cos() * 250.0,
            -angle.sin() * 250.0,
        );
        let mut events = Events::new();

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &free_play(),
            &mut events,
        );

        assert_eq!(miss, None);
        assert!(events.ball_hit_wall, "bottom wall bounce must resolve");
        assert_eq!(events.goal_bounces, vec![Side::Right]);
        assert!(
            f.contains_ball(ball.pos + shift, ball.radius),
            "two reflections in one call must still land in bounds"
        );
    }

    #[test]
    fn test_wall_then_terminal_goal_uses_loop_order() {
        let f = field();
        let (left, right) = paddles(&f);
        let angle = -0.6f32;
        let mut ball = Ball::new(Vec2::new(700.0, 550.0), 8.0, angle, 0.35);
        let mut shift = Vec2::new(angle.cos() * 250.0, -angle.sin() * 250.0);
        let mut events = Events::new();

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &GameParams::default(),
            &mut events,
        );

        assert!(events.ball_hit_wall, "wall fires before the goal check");
        assert_eq!(miss, Some(Side::Right));
    }

    #[test]
    fn test_runaway_resolution_hits_cap_and_clamps() {
        // Degenerate geometry: ball exactly on the left paddle's face
        // (zero x-distance) one pixel short of the right goal keeps
        // trading reflections without shrinking the shift enough
        let f = Field::new(45.0, 600.0);
        let left = Paddle::new(Side::Left, 20.0, 0.0, 8.0, 600.0, 0);
        let right = Paddle::new(Side::Right, 2000.0, 0.0, 8.0, 600.0, 0);
        let mut ball = Ball::new(Vec2::new(36.0, 300.0), 8.0, PI, 0.35);
        let mut shift = Vec2::new(-80.0, 0.0);
        let mut events = Events::new();

        let miss = resolve_shift(
            &mut ball,
            &mut shift,
            &left,
            &right,
            &f,
            &free_play(),
            &mut events,
        );

        assert_eq!(miss, None);
        assert_eq!(shift, Vec2::ZERO);
        assert!(f.contains_ball(ball.pos, ball.radius));
    }

    proptest! {
        /// With every boundary reflective (free play, no restart), the
        /// resolved position never leaves the legal band, whatever the
        /// elapsed time or heading.
        #[test]
        fn prop_resolved_position_stays_in_bounds(
            x in 20.0f32..780.0,
            y in 8.5f32..591.5,
            angle in 0.0f32..std::f32::consts::TAU,
            elapsed in 0.0f32..10_000.0,
        ) {
            let f = field();
            let (left, right) = paddles(&f);
            let params = free_play();
            let mut ball = Ball::new(Vec2::new(x, y), 8.0, angle, params.ball_speed);
            let mut shift = Vec2::new(
                ball.angle.cos() * elapsed * ball.speed,
                -ball.angle.sin() * elapsed * ball.speed,
            );
            let mut events = Events::new();

            let miss = resolve_shift(
                &mut ball, &mut shift, &left, &right, &f, &params, &mut events,
            );

            prop_assert_eq!(miss, None);
            let final_pos = ball.pos + shift;
            prop_assert!(
                f.contains_ball(final_pos, ball.radius),
                "final position {:?} escaped the field", final_pos
            );
        }
    }
}
