use glam::Vec2;

/// Which player a paddle (or a miss) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The notification tag for this side's paddle
    pub fn paddle_object(self) -> ObjectKind {
        match self {
            Side::Left => ObjectKind::LeftPaddle,
            Side::Right => ObjectKind::RightPaddle,
        }
    }
}

/// Paddle movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Object tag used in position-changed notifications to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    LeftPaddle,
    RightPaddle,
    Ball,
}

/// Paddle component - one per side
///
/// `x` is fixed after construction; only `y` changes via movement.
/// `counter` is remaining lives in competitive mode, the opponent's
/// accumulated score in free-play mode.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // top-left corner
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub counter: u32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, counter: u32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            counter,
        }
    }
}

/// Ball component
///
/// `angle` is in radians, 0 = rightward, counter-clockwise with screen
/// y growing downward. `speed` is scalar, in px per millisecond.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // center
    pub radius: f32,
    pub angle: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, angle: f32, speed: f32) -> Self {
        Self {
            pos,
            radius,
            angle,
            speed,
        }
    }
}
