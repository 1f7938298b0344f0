//! Visible browser area the desktop surface is laid out in

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Current viewport dimensions
///
/// The host refreshes this from the live page size before every operation
/// that places or clamps a window, so nothing here is assumed to be stable
/// between interactions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Visible area in pixels
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width.max(0.0), height.max(0.0)),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Top-left corner that centers a box of `size`
    pub fn centered_origin(&self, size: Size) -> Vec2 {
        Vec2::new(
            (self.size.width - size.width) / 2.0,
            (self.size.height - size.height) / 2.0,
        )
    }
}
