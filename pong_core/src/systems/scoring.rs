//! Score & mode policy
//!
//! Decides what a miss means under the active mode: a lost life (and
//! possibly elimination) in competitive play, a point for the opponent in
//! free play.

use hecs::World;

use crate::components::{Paddle, Side};
use crate::config::{GameParams, Mode};
use crate::resources::{CounterUpdate, Events};

/// Apply the mode policy for a miss by `side`
///
/// Competitive: decrements the missing side's lives; at zero, reports the
/// eliminated side and resets both counters for the next session. Free
/// play: increments the opponent's counter; never terminal.
pub fn apply_miss(
    world: &mut World,
    params: &GameParams,
    side: Side,
    events: &mut Events,
) -> Option<Side> {
    match params.mode {
        Mode::Competitive { .. } => {
            let mut eliminated = false;
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                if paddle.side == side {
                    paddle.counter = paddle.counter.saturating_sub(1);
                    events.counters.push(CounterUpdate {
                        count: paddle.counter,
                        side: Some(side),
                    });
                    eliminated = paddle.counter == 0;
                }
            }
            if eliminated {
                events.loser = Some(side);
                reset_counters(world, params, events);
                Some(side)
            } else {
                None
            }
        }
        Mode::Free { .. } => {
            let opponent = side.opponent();
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                if paddle.side == opponent {
                    paddle.counter += 1;
                    events.counters.push(CounterUpdate {
                        count: paddle.counter,
                        side: Some(opponent),
                    });
                }
            }
            None
        }
    }
}

/// Whether a non-terminal miss should freeze the frame loop
pub fn should_pause(params: &GameParams) -> bool {
    params.miss_pause
        && match params.mode {
            Mode::Competitive { .. } => true,
            Mode::Free { need_restart, .. } => need_restart,
        }
}

/// Reset both counters to the mode's starting value
pub fn reset_counters(world: &mut World, params: &GameParams, events: &mut Events) {
    let start = match params.mode {
        Mode::Competitive { lives } => lives,
        Mode::Free { has_counter, .. } => {
            if !has_counter {
                return;
            }
            0
        }
    };
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.counter = start;
    }
    events.counters.push(CounterUpdate {
        count: start,
        side: None,
    });
}
