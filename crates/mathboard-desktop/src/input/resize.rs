//! Resize controller: pointer gestures on the corner handle become sizes

use crate::math::{Size, Vec2};

/// Per-window resize state machine
///
/// Only the bottom-right corner is grabbable, so the origin never moves.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResizeController {
    #[default]
    Idle,
    Resizing {
        /// Pointer position at pointer-down
        start_pointer: Vec2,
        /// Window size at pointer-down
        start_size: Size,
        /// Size after the latest pointer move
        live: Size,
    },
}

impl ResizeController {
    /// Start resizing a window currently of `size`
    pub fn begin(&mut self, pointer: Vec2, size: Size) {
        *self = ResizeController::Resizing {
            start_pointer: pointer,
            start_size: size,
            live: size,
        };
    }

    /// Follow the pointer, returning the new live size
    pub fn update(&mut self, pointer: Vec2, min_size: Size) -> Option<Size> {
        match self {
            ResizeController::Idle => None,
            ResizeController::Resizing { start_pointer, start_size, live } => {
                *live = resized(*start_size, pointer - *start_pointer, min_size);
                Some(*live)
            }
        }
    }

    /// Release the pointer: back to idle, returning the size to commit
    pub fn finish(&mut self) -> Option<Size> {
        match std::mem::take(self) {
            ResizeController::Idle => None,
            ResizeController::Resizing { live, .. } => Some(live),
        }
    }

    /// Live size while resizing
    pub fn live_size(&self) -> Option<Size> {
        match self {
            ResizeController::Idle => None,
            ResizeController::Resizing { live, .. } => Some(*live),
        }
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, ResizeController::Resizing { .. })
    }
}

/// Grow `start` by the pointer delta, never below `min_size`
///
/// No upper bound here; the frame view caps what is drawn.
pub fn resized(start: Size, delta: Vec2, min_size: Size) -> Size {
    Size::new(start.width + delta.x, start.height + delta.y).at_least(min_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(280.0, 200.0);

    #[test]
    fn test_resize_grows_with_pointer() {
        let mut resize = ResizeController::default();
        resize.begin(Vec2::new(500.0, 400.0), Size::new(400.0, 300.0));

        let size = resize.update(Vec2::new(600.0, 450.0), MIN).unwrap();
        assert!((size.width - 500.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_both_floors_hit() {
        let size = resized(Size::new(300.0, 300.0), Vec2::new(-100.0, -500.0), MIN);
        assert!((size.width - 280.0).abs() < 0.001);
        assert!((size.height - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_no_upper_clamp() {
        let size = resized(Size::new(300.0, 300.0), Vec2::new(5000.0, 5000.0), MIN);
        assert!((size.width - 5300.0).abs() < 0.001);
    }

    #[test]
    fn test_delta_measured_from_start_not_previous_move() {
        let mut resize = ResizeController::default();
        resize.begin(Vec2::new(0.0, 0.0), Size::new(400.0, 300.0));

        resize.update(Vec2::new(100.0, 100.0), MIN);
        resize.update(Vec2::new(50.0, 20.0), MIN);
        let committed = resize.finish().unwrap();
        assert!((committed.width - 450.0).abs() < 0.001);
        assert!((committed.height - 320.0).abs() < 0.001);
        assert!(!resize.is_resizing());
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut resize = ResizeController::default();
        assert!(resize.update(Vec2::new(1.0, 1.0), MIN).is_none());
        assert!(resize.finish().is_none());
        assert!(resize.live_size().is_none());
    }
}
