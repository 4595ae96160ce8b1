//! Play/pause/miss/stop state machine
//!
//! Owned by the frame-loop driver: pausing or stopping simply withholds
//! the next `advance` call, so no in-flight work is ever aborted.

/// Game loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Play,
    Pause,
    /// Rally ended by a miss, waiting for acknowledgement
    Miss,
    Stop,
}

/// A successful state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: GameState,
    pub to: GameState,
}

impl Transition {
    /// The start sound plays on this transition
    pub fn starts_game(&self) -> bool {
        self.from == GameState::Stop && self.to == GameState::Play
    }
}

/// Game state machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Stop,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Toggle between play and pause, or resume from a miss
    ///
    /// A stopped game cannot be toggled back to life; it takes an
    /// explicit `set(Play)`.
    pub fn toggle(&mut self) -> Option<Transition> {
        let to = match self.state {
            GameState::Play => GameState::Pause,
            GameState::Pause | GameState::Miss => GameState::Play,
            GameState::Stop => return None,
        };
        self.set(to)
    }

    /// Move to an explicit state; a no-op when already there
    pub fn set(&mut self, to: GameState) -> Option<Transition> {
        if to == self.state {
            return None;
        }
        let from = self.state;
        self.state = to;
        Some(Transition { from, to })
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
