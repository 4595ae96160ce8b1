//! Paddle movement

use hecs::World;

use crate::components::{Direction, Paddle, Side};
use crate::config::GameParams;
use crate::field::Field;
use crate::resources::Events;

/// Apply one speed-increment of paddle motion, clamped to the field
///
/// When the unclamped target would exceed a bound the paddle snaps
/// exactly to the bound. Returns whether a move occurred; a paddle
/// already pinned at the bound moving further into it is a no-op.
pub fn move_paddle(
    world: &mut World,
    field: &Field,
    params: &GameParams,
    events: &mut Events,
    side: Side,
    direction: Direction,
) -> bool {
    let step = params.paddle_speed;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != side {
            continue;
        }
        let moved = match direction {
            Direction::Up => {
                if paddle.y > step {
                    paddle.y -= step;
                    true
                } else if paddle.y != 0.0 {
                    paddle.y = 0.0;
                    true
                } else {
                    false
                }
            }
            Direction::Down => {
                if paddle.y + paddle.height < field.height - step {
                    paddle.y += step;
                    true
                } else if paddle.y + paddle.height != field.height {
                    paddle.y = field.height - paddle.height;
                    true
                } else {
                    false
                }
            }
        };
        if moved {
            events.moved.push(side.paddle_object());
        }
        return moved;
    }
    false
}
