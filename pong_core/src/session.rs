//! Single-game session facade.
//!
//! Owns the world, field, clock, state machine, and sound cues for one
//! game, so a driver only deals in timestamps, input, and drained
//! output. Everything underneath stays the pure simulation in
//! [`crate::advance`].

#[cfg(test)]
use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Direction, Paddle, Side};
use crate::config::{GameParams, Shapes};
use crate::field::Field;
use crate::fsm::{GameFsm, GameState, Transition};
use crate::resources::{Events, GameRng, InputQueue, Outcome, SoundCue, Time};
use crate::systems;

pub struct Session {
    world: World,
    field: Field,
    params: GameParams,
    events: Events,
    rng: GameRng,
    fsm: GameFsm,
    inputs: InputQueue,
    time: Time,
    last_stamp: Option<f32>,
    sounds_enabled: bool,
    sounds: Vec<SoundCue>,
}

impl Session {
    pub fn new(params: GameParams, shapes: Shapes, field: Field, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let paddle_y = field.paddle_center_y(shapes.paddle_height);
        crate::create_paddle(
            &mut world,
            Side::Left,
            shapes.paddle_offset,
            paddle_y,
            shapes.paddle_width,
            shapes.paddle_height,
            &params,
        );
        crate::create_paddle(
            &mut world,
            Side::Right,
            field.width - shapes.paddle_offset - shapes.paddle_width,
            paddle_y,
            shapes.paddle_width,
            shapes.paddle_height,
            &params,
        );
        let angle = systems::serve_angle(&mut rng);
        crate::create_ball(
            &mut world,
            field.center(),
            shapes.ball_radius,
            angle,
            params.ball_speed,
        );
        Self {
            world,
            field,
            params,
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
            inputs: InputQueue::new(),
            time: Time::default(),
            last_stamp: None,
            sounds_enabled: true,
            sounds: Vec::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Events raised by the most recent frame (and any state commands
    /// issued since)
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Direct access to the entity world, for drivers that render or
    /// inspect more than the ball and paddles
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Queue one paddle step for the next frame. Drivers poll held keys
    /// and call this once per key per frame.
    pub fn queue_move(&mut self, side: Side, direction: Direction) {
        self.inputs.push(side, direction);
    }

    /// Drive one animation frame from a monotonic timestamp in
    /// milliseconds. The first frame after entering play sees zero
    /// elapsed time.
    pub fn frame(&mut self, timestamp_ms: f32) -> Outcome {
        let elapsed = match self.last_stamp {
            None => 0.0,
            Some(previous) => timestamp_ms - previous,
        };
        self.last_stamp = Some(timestamp_ms);
        self.advance(elapsed)
    }

    /// Advance the simulation by an elapsed time in milliseconds.
    /// Does nothing unless the game is in play.
    pub fn advance(&mut self, elapsed_ms: f32) -> Outcome {
        if self.fsm.state() != GameState::Play {
            self.inputs.clear();
            return Outcome::Continue;
        }
        let dt = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            elapsed_ms
        } else {
            0.0
        };
        self.time = Time::new(dt, self.time.now + dt);
        let outcome = crate::advance(
            &mut self.world,
            &self.time,
            &self.field,
            &self.params,
            &mut self.events,
            &mut self.rng,
            &mut self.inputs,
        );

        if self.events.ball_hit_paddle {
            self.cue(SoundCue::Ping);
        }
        match outcome {
            Outcome::Continue => {}
            Outcome::Miss { pause, .. } => {
                self.cue(SoundCue::Pong);
                if pause {
                    self.fsm.set(GameState::Miss);
                }
            }
            Outcome::Loss { .. } => {
                self.cue(SoundCue::GameOver);
                self.fsm.set(GameState::Stop);
            }
        }
        outcome
    }

    /// Begin play from a stopped, paused, or missed state
    pub fn start(&mut self) -> Option<Transition> {
        let transition = self.fsm.set(GameState::Play);
        self.note_transition(transition);
        transition
    }

    /// Toggle play/pause, or resume after a miss
    pub fn toggle(&mut self) -> Option<Transition> {
        let transition = self.fsm.toggle();
        self.note_transition(transition);
        transition
    }

    /// Stop the game and reset paddles, ball, and counters
    pub fn stop(&mut self) -> Option<Transition> {
        let transition = self.fsm.set(GameState::Stop);
        self.reset_rally(true);
        transition
    }

    /// Restart in place: full reset, then straight back into play
    pub fn restart(&mut self) {
        self.fsm.set(GameState::Pause);
        self.reset_rally(true);
        let transition = self.fsm.set(GameState::Play);
        self.note_transition(transition);
    }

    /// Recentre paddles and ball and draw a fresh serve heading.
    /// A hard reset also restores the counters.
    pub fn reset_rally(&mut self, hard: bool) {
        systems::reset_rally(
            &mut self.world,
            &self.field,
            &self.params,
            &mut self.events,
            &mut self.rng,
            hard,
        );
    }

    /// Rescale every object into a new field
    pub fn resize(&mut self, new: Field) {
        systems::resize(&mut self.world, &mut self.field, new, &mut self.events);
    }

    /// Swap in new parameters mid-game. The ball picks up the new speed
    /// immediately; counters are only touched when asked, so a speed
    /// tweak never resets the score.
    pub fn set_params(&mut self, params: GameParams, reset_counters: bool) {
        self.params = params;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.speed = self.params.ball_speed;
        }
        if reset_counters {
            systems::reset_counters(&mut self.world, &self.params, &mut self.events);
        }
    }

    pub fn sounds_enabled(&self) -> bool {
        self.sounds_enabled
    }

    pub fn toggle_sounds(&mut self) -> bool {
        self.sounds_enabled = !self.sounds_enabled;
        if !self.sounds_enabled {
            self.sounds.clear();
        }
        self.sounds_enabled
    }

    /// Take the sound cues accumulated since the last drain
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }

    fn cue(&mut self, cue: SoundCue) {
        if self.sounds_enabled {
            self.sounds.push(cue);
        }
    }

    // Entering play restarts the frame clock so time spent paused never
    // becomes one giant elapsed step.
    fn note_transition(&mut self, transition: Option<Transition>) {
        let Some(transition) = transition else {
            return;
        };
        if transition.to == GameState::Play {
            self.last_stamp = None;
        }
        if transition.starts_game() {
            self.cue(SoundCue::Start);
        }
    }

    #[cfg(test)]
    fn place_ball(&mut self, pos: Vec2, angle: f32) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.angle = angle;
        }
    }
}
