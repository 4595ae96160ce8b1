use crate::components::{Direction, ObjectKind, Side};

/// Time resource for one simulation frame
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Elapsed milliseconds for this frame
    pub now: f32, // Total elapsed milliseconds
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Random number generator for serve angles
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Outcome of one `advance` call
///
/// Misses and losses are domain outcomes, not faults: they are returned
/// as values rather than panicking or erroring out of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The rally continues
    Continue,
    /// A goal-line crossing ended the rally; `pause` tells the driver
    /// whether to freeze the frame loop pending acknowledgement
    Miss { side: Side, pause: bool },
    /// The missing side's lives reached zero; the session is over
    Loss { side: Side },
}

/// Sound cues for the audio sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Paddle bounce
    Ping,
    /// Non-terminal miss
    Pong,
    /// Elimination
    GameOver,
    /// Transition out of the stopped state
    Start,
}

/// A lives/score counter update for the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterUpdate {
    pub count: u32,
    /// `None` means both sides (wholesale counter reset)
    pub side: Option<Side>,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    /// Set at most once per resolved frame, however many loop passes hit
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    /// Free-play goal crossings that bounced through without ending the rally
    pub goal_bounces: Vec<Side>,
    /// The side whose miss ended the rally (non-terminal)
    pub missed: Option<Side>,
    /// The side eliminated this frame
    pub loser: Option<Side>,
    pub counters: Vec<CounterUpdate>,
    /// Objects whose position changed
    pub moved: Vec<ObjectKind>,
    /// The field was replaced by a resize
    pub resized: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.goal_bounces.clear();
        self.missed = None;
        self.loser = None;
        self.counters.clear();
        self.moved.clear();
        self.resized = false;
    }
}

/// Paddle input queue, fed by the driver's held-key polling
///
/// Drained at the start of each frame, before the ball advances.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub moves: Vec<(Side, Direction)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, side: Side, direction: Direction) {
        self.moves.push((side, direction));
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
