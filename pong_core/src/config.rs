/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (initial; the field changes on viewport resize)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_OFFSET: f32 = 15.0; // distance from the goal edge

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;

    // Settings sliders map to simulation units through these factors
    pub const BALL_SPEED_ADJUSTMENT: f32 = 0.05; // slider unit -> px/ms
    pub const PADDLE_SPEED_ADJUSTMENT: f32 = 1.0; // slider unit -> px/move
    pub const BALL_DEFAULT_SPEED: f32 = 7.0; // slider units
    pub const PADDLE_DEFAULT_SPEED: f32 = 5.0; // slider units

    pub const DEFAULT_LIVES: u32 = 3;

    // Safety net for the bounce-resolution loop; never reached by
    // well-formed inputs (each reflection shrinks the remaining shift)
    pub const MAX_BOUNCE_PASSES: u32 = 16;
}

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Life-based elimination: each miss costs the missing side a life
    Competitive { lives: u32 },
    /// Open-ended play; a miss optionally ends the rally and optionally
    /// feeds a visible score counter
    Free { need_restart: bool, has_counter: bool },
}

impl Mode {
    pub fn is_competitive(&self) -> bool {
        matches!(self, Mode::Competitive { .. })
    }
}

/// Per-session game parameters
///
/// An immutable snapshot for the session; replaced wholesale on settings
/// change. Owned by the session, never ambient state.
#[derive(Debug, Clone, Copy)]
pub struct GameParams {
    pub mode: Mode,
    /// Whether a miss freezes the frame loop pending acknowledgement
    pub miss_pause: bool,
    /// Ball speed in px per millisecond
    pub ball_speed: f32,
    /// Paddle step in px per move
    pub paddle_speed: f32,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            mode: Mode::Competitive {
                lives: Params::DEFAULT_LIVES,
            },
            miss_pause: true,
            ball_speed: Params::BALL_DEFAULT_SPEED * Params::BALL_SPEED_ADJUSTMENT,
            paddle_speed: Params::PADDLE_DEFAULT_SPEED * Params::PADDLE_SPEED_ADJUSTMENT,
        }
    }
}

impl GameParams {
    /// Build params from raw settings-form values, applying the slider
    /// adjustment factors; zero/absent sliders fall back to defaults
    pub fn from_settings(mode: Mode, miss_pause: bool, ball_slider: f32, paddle_slider: f32) -> Self {
        let ball = if ball_slider > 0.0 {
            ball_slider
        } else {
            Params::BALL_DEFAULT_SPEED
        };
        let paddle = if paddle_slider > 0.0 {
            paddle_slider
        } else {
            Params::PADDLE_DEFAULT_SPEED
        };
        Self {
            mode,
            miss_pause,
            ball_speed: ball * Params::BALL_SPEED_ADJUSTMENT,
            paddle_speed: paddle * Params::PADDLE_SPEED_ADJUSTMENT,
        }
    }

    /// Initial paddle counter value for this mode
    pub fn starting_counter(&self) -> u32 {
        match self.mode {
            Mode::Competitive { lives } => lives,
            Mode::Free { .. } => 0,
        }
    }

    /// Whether a goal-line crossing ends the rally (as opposed to
    /// bouncing through and scoring in passing)
    pub fn terminal_goal(&self) -> bool {
        match self.mode {
            Mode::Competitive { .. } => true,
            Mode::Free { need_restart, .. } => need_restart,
        }
    }
}

/// Initial shape parameters for the game objects
#[derive(Debug, Clone, Copy)]
pub struct Shapes {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub ball_radius: f32,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            ball_radius: Params::BALL_RADIUS,
        }
    }
}
