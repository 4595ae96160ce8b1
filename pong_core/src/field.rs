use glam::Vec2;

use crate::config::Params;

/// The play field rectangle
///
/// Mutable over a session: replaced on viewport resize, with all object
/// positions rescaled proportionally (see `systems::layout`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Vertical-center y for a paddle of the given height
    pub fn paddle_center_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height) / 2.0
    }

    /// Whether a ball center lies strictly inside the legal band
    pub fn contains_ball(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
        }
    }
}
