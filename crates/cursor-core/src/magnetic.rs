//! Elements that lean toward the pointer while hovered.

use crate::constants::{
    MAGNETIC_CONTENT_FACTOR, MAGNETIC_EASE, MAGNETIC_SETTLE_PX, MAGNETIC_STRENGTH,
};
use glam::Vec2;

/// Axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    pub strength: f32,
    pub ease: f32,
    pub settle_px: f32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: MAGNETIC_STRENGTH,
            ease: MAGNETIC_EASE,
            settle_px: MAGNETIC_SETTLE_PX,
        }
    }
}

/// Eased translation of one magnetic element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagneticOffset {
    pub offset: Vec2,
    pub target: Vec2,
    pub config: MagneticConfig,
}

impl MagneticOffset {
    pub fn new(config: MagneticConfig) -> Self {
        Self {
            offset: Vec2::ZERO,
            target: Vec2::ZERO,
            config,
        }
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2, rect: Rect) {
        let pull = (pointer - rect.center()) * self.config.strength;
        if pull.is_finite() {
            self.target = pull;
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Snap back to rest immediately.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.target = Vec2::ZERO;
    }

    /// Ease one frame toward the target. Returns true while still moving.
    pub fn step(&mut self) -> bool {
        self.offset += (self.target - self.offset) * self.config.ease;
        !self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        let gap = (self.target - self.offset).abs();
        gap.x <= self.config.settle_px && gap.y <= self.config.settle_px
    }

    /// Translation for the element's inner content.
    #[inline]
    pub fn content_offset(&self) -> Vec2 {
        self.offset * MAGNETIC_CONTENT_FACTOR
    }
}
