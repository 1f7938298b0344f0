//! Width/height pair for window and viewport dimensions

use serde::{Deserialize, Serialize};

/// 2D size in surface pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Floor both dimensions at `min`
    #[inline]
    pub fn at_least(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }

    /// Cap both dimensions at `max`
    #[inline]
    pub fn at_most(self, max: Size) -> Self {
        Self::new(self.width.min(max.width), self.height.min(max.height))
    }

    /// Scale each dimension by its own factor
    #[inline]
    pub fn fraction(self, width_factor: f32, height_factor: f32) -> Self {
        Self::new(self.width * width_factor, self.height * height_factor)
    }
}
