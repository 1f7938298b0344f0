//! Drag controller: pointer gestures on a grip become window positions

use crate::math::Vec2;
use crate::viewport::Viewport;

/// Per-window move state machine
///
/// `Idle` -> `begin` -> `Dragging` -> `finish` -> `Idle`. While dragging, the
/// live position is the only copy of the window's on-screen origin; the
/// registry keeps the last committed one until `finish` hands it back.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragController {
    #[default]
    Idle,
    Dragging {
        /// Pointer position minus window origin at pointer-down
        offset: Vec2,
        /// Clamped position after the latest pointer move
        live: Vec2,
    },
}

impl DragController {
    /// Start dragging a window currently at `window_pos`
    ///
    /// The live position starts clamped to the current viewport, so a
    /// release without any move still commits a re-grabbable origin.
    pub fn begin(&mut self, pointer: Vec2, window_pos: Vec2, window_width: f32, viewport: &Viewport, margin: f32) {
        *self = DragController::Dragging {
            offset: pointer - window_pos,
            live: clamp_drag_position(window_pos, window_width, viewport, margin),
        };
    }

    /// Follow the pointer, returning the new live position
    ///
    /// Does nothing while idle.
    pub fn update(&mut self, pointer: Vec2, window_width: f32, viewport: &Viewport, margin: f32) -> Option<Vec2> {
        match self {
            DragController::Idle => None,
            DragController::Dragging { offset, live } => {
                *live = clamp_drag_position(pointer - *offset, window_width, viewport, margin);
                Some(*live)
            }
        }
    }

    /// Release the pointer: back to idle, returning the position to commit
    pub fn finish(&mut self) -> Option<Vec2> {
        match std::mem::take(self) {
            DragController::Idle => None,
            DragController::Dragging { live, .. } => Some(live),
        }
    }

    /// Live position while dragging
    pub fn live_position(&self) -> Option<Vec2> {
        match self {
            DragController::Idle => None,
            DragController::Dragging { live, .. } => Some(*live),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragController::Dragging { .. })
    }
}

/// Keep a dragged window re-grabbable
///
/// The top edge stays on screen and no higher than `margin` above the bottom
/// edge; at least `margin` pixels of width stay visible at the left and right.
pub fn clamp_drag_position(candidate: Vec2, window_width: f32, viewport: &Viewport, margin: f32) -> Vec2 {
    let y = candidate.y.min(viewport.height() - margin).max(0.0);

    let mut x = candidate.x;
    if x + window_width < margin {
        x = margin - window_width;
    }
    if x > viewport.width() - margin {
        x = viewport.width() - margin;
    }

    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1920.0, 1080.0)
    }

    #[test]
    fn test_begin_records_offset() {
        let mut drag = DragController::default();
        drag.begin(Vec2::new(130.0, 110.0), Vec2::new(100.0, 100.0), 400.0, &viewport(), 50.0);

        assert!(drag.is_dragging());
        if let DragController::Dragging { offset, live } = drag {
            assert!((offset.x - 30.0).abs() < 0.001);
            assert!((offset.y - 10.0).abs() < 0.001);
            assert_eq!(live, Vec2::new(100.0, 100.0));
        } else {
            panic!("Expected Dragging state");
        }
    }

    #[test]
    fn test_update_keeps_grab_point_under_pointer() {
        let mut drag = DragController::default();
        drag.begin(Vec2::new(130.0, 110.0), Vec2::new(100.0, 100.0), 400.0, &viewport(), 50.0);

        let pos = drag.update(Vec2::new(530.0, 410.0), 400.0, &viewport(), 50.0).unwrap();
        assert!((pos.x - 500.0).abs() < 0.001);
        assert!((pos.y - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_later_moves_overwrite_earlier() {
        let mut drag = DragController::default();
        drag.begin(Vec2::ZERO, Vec2::ZERO, 400.0, &viewport(), 50.0);

        drag.update(Vec2::new(300.0, 300.0), 400.0, &viewport(), 50.0);
        drag.update(Vec2::new(200.0, 250.0), 400.0, &viewport(), 50.0);
        assert_eq!(drag.finish(), Some(Vec2::new(200.0, 250.0)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_idle_ignores_moves_and_release() {
        let mut drag = DragController::default();
        assert!(drag.update(Vec2::new(10.0, 10.0), 400.0, &viewport(), 50.0).is_none());
        assert!(drag.finish().is_none());
        assert!(drag.live_position().is_none());
    }

    #[test]
    fn test_release_without_move_commits_start_position() {
        let mut drag = DragController::default();
        drag.begin(Vec2::new(5.0, 5.0), Vec2::new(640.0, 200.0), 400.0, &viewport(), 50.0);
        assert_eq!(drag.finish(), Some(Vec2::new(640.0, 200.0)));
    }

    #[test]
    fn test_begin_clamps_to_shrunk_viewport() {
        // Window placed low on a tall page, then the page shrank to 600px
        let mut drag = DragController::default();
        drag.begin(Vec2::new(110.0, 910.0), Vec2::new(100.0, 900.0), 400.0, &Viewport::new(1920.0, 600.0), 50.0);

        assert_eq!(drag.live_position(), Some(Vec2::new(100.0, 550.0)));
        assert_eq!(drag.finish(), Some(Vec2::new(100.0, 550.0)));
    }

    #[test]
    fn test_clamp_far_left() {
        let pos = clamp_drag_position(Vec2::new(-1000.0, 300.0), 400.0, &viewport(), 50.0);
        assert!((pos.x - (-350.0)).abs() < 0.001);
    }

    #[test]
    fn test_clamp_far_right() {
        let pos = clamp_drag_position(Vec2::new(5000.0, 300.0), 400.0, &viewport(), 50.0);
        assert!((pos.x - 1870.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_top_and_bottom() {
        let above = clamp_drag_position(Vec2::new(100.0, -40.0), 400.0, &viewport(), 50.0);
        assert!((above.y - 0.0).abs() < 0.001);

        let below = clamp_drag_position(Vec2::new(100.0, 4000.0), 400.0, &viewport(), 50.0);
        assert!((below.y - 1030.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let pos = clamp_drag_position(Vec2::new(-100.0, 900.0), 400.0, &viewport(), 50.0);
        assert_eq!(pos, Vec2::new(-100.0, 900.0));
    }

    #[test]
    fn test_tiny_viewport_keeps_top_on_screen() {
        let pos = clamp_drag_position(Vec2::new(0.0, 500.0), 400.0, &Viewport::new(300.0, 30.0), 50.0);
        assert!((pos.y - 0.0).abs() < 0.001);
    }
}
