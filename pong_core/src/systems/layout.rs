//! Viewport rescaling

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, ObjectKind, Paddle, Side};
use crate::field::Field;
use crate::resources::Events;

/// Rescale every object proportionally into a new field
///
/// The right paddle's x is recomputed from the new width and the left
/// paddle's scaled offset rather than scaled directly; scaling it would
/// double-count the paddle's own width and drift its edge offset.
pub fn resize(world: &mut World, field: &mut Field, new: Field, events: &mut Events) {
    let ratio = Vec2::new(new.width / field.width, new.height / field.height);

    let mut left_x = None;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.x *= ratio.x;
            paddle.y *= ratio.y;
            left_x = Some(paddle.x);
            events.moved.push(ObjectKind::LeftPaddle);
        }
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            match left_x {
                Some(x) => paddle.x = new.width - x - paddle.width,
                None => paddle.x *= ratio.x,
            }
            paddle.y *= ratio.y;
            events.moved.push(ObjectKind::RightPaddle);
        }
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos *= ratio;
        events.moved.push(ObjectKind::Ball);
    }

    *field = new;
    events.resized = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameParams;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Field) {
        let field = Field::new(800.0, 600.0);
        let params = GameParams::default();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 15.0, 275.0, 8.0, 50.0, &params);
        create_paddle(
            &mut world,
            Side::Right,
            800.0 - 15.0 - 8.0,
            275.0,
            8.0,
            50.0,
            &params,
        );
        create_ball(&mut world, Vec2::new(400.0, 300.0), 8.0, 0.0, 0.35);
        (world, field)
    }

    fn paddle(world: &World, side: Side) -> Paddle {
        *world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .unwrap()
            .1
    }

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    #[test]
    fn test_resize_scales_proportionally() {
        let (mut world, mut field) = setup();
        let mut events = Events::new();

        resize(&mut world, &mut field, Field::new(1600.0, 300.0), &mut events);

        assert_eq!(field, Field::new(1600.0, 300.0));
        let left = paddle(&world, Side::Left);
        assert_eq!(left.x, 30.0);
        assert_eq!(left.y, 137.5);
        assert_eq!(ball(&world).pos, Vec2::new(800.0, 150.0));
        assert!(events.resized);
    }

    #[test]
    fn test_right_paddle_keeps_edge_offset() {
        let (mut world, mut field) = setup();
        let mut events = Events::new();

        resize(&mut world, &mut field, Field::new(1600.0, 600.0), &mut events);

        let left = paddle(&world, Side::Left);
        let right = paddle(&world, Side::Right);
        // The offset from each goal edge must match: naive x-scaling of the
        // right paddle would also scale its width into the offset
        assert_eq!(right.x, 1600.0 - left.x - right.width);
        assert_eq!(1600.0 - right.x - right.width, left.x);
    }

    #[test]
    fn test_resize_to_same_field_is_noop() {
        let (mut world, mut field) = setup();
        let before_left = paddle(&world, Side::Left);
        let before_right = paddle(&world, Side::Right);
        let before_ball = ball(&world);
        let mut events = Events::new();

        resize(&mut world, &mut field, Field::new(800.0, 600.0), &mut events);

        let after_left = paddle(&world, Side::Left);
        let after_right = paddle(&world, Side::Right);
        assert_eq!(after_left.x, before_left.x);
        assert_eq!(after_left.y, before_left.y);
        assert_eq!(after_right.x, before_right.x);
        assert_eq!(after_right.y, before_right.y);
        assert_eq!(ball(&world).pos, before_ball.pos);
    }
}
