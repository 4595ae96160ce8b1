//! Wire protocol between a game driver and its display/recording sink
//!
//! Uses postcard for efficient binary serialization. This crate stands
//! alone: everything here is plain data, so a sink can decode a tape
//! without pulling in the simulation.

use postcard::{from_bytes, to_allocvec};

/// Which player a message concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayerSide {
    Left,
    Right,
}

/// One-step paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PaddleDir {
    Up,
    Down,
}

/// Game loop state as seen by a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StateKind {
    Play,
    Pause,
    Miss,
    Stop,
}

/// Sound effect identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SoundKind {
    Ping,
    Pong,
    GameOver,
    Start,
}

/// Movable objects a position update can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ObjectTag {
    LeftPaddle,
    RightPaddle,
    Ball,
}

// ============================================================================
// Cmd Messages (driver to game)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Cmd {
    /// One paddle step while the key is held
    MovePaddle { side: PlayerSide, dir: PaddleDir },

    /// Toggle play/pause, or resume after a miss
    Toggle,

    /// Force a specific state
    SetState { state: StateKind },

    /// Full reset, then straight back into play
    Restart,

    /// Stop and reset everything
    Stop,

    /// The display surface changed size
    Resize { width: f32, height: f32 },

    /// Replace game parameters; `reset_counters` also restores the score
    SetParams {
        competitive: bool,
        lives: u32,
        need_restart: bool,
        has_counter: bool,
        miss_pause: bool,
        ball_slider: f32,
        paddle_slider: f32,
        reset_counters: bool,
    },

    ToggleSounds,
}

// ============================================================================
// Note Messages (game to sink)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Note {
    /// An object moved this frame
    Position { object: ObjectTag, x: f32, y: f32 },

    /// The field was rescaled
    FieldResized { width: f32, height: f32 },

    /// A counter changed; `side: None` means both sides
    Counter { count: u32, side: Option<PlayerSide> },

    /// The state machine transitioned
    StateChanged { old: StateKind, new: StateKind },

    /// Play a sound effect
    Sound { kind: SoundKind },

    /// A rally ended at this side's goal
    Missed { side: PlayerSide },

    /// This side ran out of lives
    Loser { side: PlayerSide },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Cmd {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Note {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
