//! Chrome layout for opaque and ghost frames
//!
//! An opaque frame stacks a title bar (with close button) over a content
//! area and carries a resize handle in the bottom-right corner. A ghost
//! frame has no chrome: a small floating bar with a move grip and a close
//! button sits at the frame origin, the content is drawn directly below it.

use serde::Serialize;
use crate::math::{Rect, FRAME_STYLE};
use super::WindowRegion;

/// Screen rectangles of every part of one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeLayout {
    /// Everything the frame paints; pointer events outside fall through
    pub bounds: Rect,
    /// Drag grip (title bar or ghost grip)
    pub grip: Rect,
    pub close_button: Rect,
    pub content: Rect,
    /// Absent on ghost frames
    pub resize_handle: Option<Rect>,
    pub ghost: bool,
}

impl ChromeLayout {
    /// Layout of an opaque frame occupying `frame`
    pub fn opaque(frame: Rect) -> Self {
        let s = &FRAME_STYLE;
        let title_height = s.title_bar_height.min(frame.height);

        let grip = Rect::new(frame.x, frame.y, frame.width, title_height);
        let close_button = Rect::new(
            frame.right() - s.close_button_margin - s.close_button_size,
            frame.y + (s.title_bar_height - s.close_button_size) / 2.0,
            s.close_button_size,
            s.close_button_size,
        );
        let content = Rect::new(
            frame.x,
            frame.y + title_height,
            frame.width,
            (frame.height - title_height).max(0.0),
        );
        let resize_handle = Rect::new(
            frame.right() - s.resize_handle_size,
            frame.bottom() - s.resize_handle_size,
            s.resize_handle_size,
            s.resize_handle_size,
        );

        Self {
            bounds: frame,
            grip,
            close_button,
            content,
            resize_handle: Some(resize_handle),
            ghost: false,
        }
    }

    /// Layout of a ghost frame whose origin is `frame.position()` and whose
    /// content has the intrinsic size `frame.size()`
    pub fn ghost(frame: Rect) -> Self {
        let s = &FRAME_STYLE;
        let bar = s.ghost_bar_height;

        let grip = Rect::new(frame.x, frame.y, s.ghost_grip_width, bar);
        let close_button = Rect::new(grip.right() + s.ghost_bar_gap, frame.y, bar, bar);
        let content = Rect::new(frame.x, frame.y + bar + s.ghost_bar_gap, frame.width, frame.height);
        let bounds = grip.union(&close_button).union(&content);

        Self {
            bounds,
            grip,
            close_button,
            content,
            resize_handle: None,
            ghost: true,
        }
    }

    /// Region under `pos`, or `None` if the pointer misses the frame
    ///
    /// Buttons win over the grip, the resize corner wins over content.
    pub fn hit(&self, pos: crate::math::Vec2) -> Option<WindowRegion> {
        if !self.bounds.contains(pos) {
            return None;
        }
        if self.close_button.contains(pos) {
            return Some(WindowRegion::CloseButton);
        }
        if self.grip.contains(pos) {
            return Some(if self.ghost { WindowRegion::GhostGrip } else { WindowRegion::TitleBar });
        }
        if let Some(handle) = self.resize_handle {
            if handle.contains(pos) {
                return Some(WindowRegion::ResizeHandle);
            }
        }
        if self.content.contains(pos) {
            return Some(WindowRegion::Content);
        }
        // Gap beside the ghost bar: transparent, let it through
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_opaque_layout() {
        let layout = ChromeLayout::opaque(Rect::new(100.0, 100.0, 400.0, 300.0));

        assert!((layout.grip.height - FRAME_STYLE.title_bar_height).abs() < 0.001);
        assert!((layout.content.y - (100.0 + FRAME_STYLE.title_bar_height)).abs() < 0.001);
        assert!((layout.content.bottom() - 400.0).abs() < 0.001);
        let handle = layout.resize_handle.unwrap();
        assert!((handle.right() - 500.0).abs() < 0.001);
        assert!((handle.bottom() - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_opaque_hit_priority() {
        let layout = ChromeLayout::opaque(Rect::new(100.0, 100.0, 400.0, 300.0));

        assert_eq!(layout.hit(Vec2::new(200.0, 110.0)), Some(WindowRegion::TitleBar));
        let close = layout.close_button;
        assert_eq!(
            layout.hit(Vec2::new(close.x + 2.0, close.y + 2.0)),
            Some(WindowRegion::CloseButton)
        );
        assert_eq!(layout.hit(Vec2::new(495.0, 395.0)), Some(WindowRegion::ResizeHandle));
        assert_eq!(layout.hit(Vec2::new(300.0, 250.0)), Some(WindowRegion::Content));
        assert_eq!(layout.hit(Vec2::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_ghost_layout_has_no_resize_handle() {
        let layout = ChromeLayout::ghost(Rect::new(100.0, 100.0, 500.0, 120.0));

        assert!(layout.resize_handle.is_none());
        assert!(layout.content.y > layout.grip.bottom());
        assert!((layout.content.width - 500.0).abs() < 0.001);
        assert!((layout.content.height - 120.0).abs() < 0.001);
        assert!((layout.bounds.bottom() - layout.content.bottom()).abs() < 0.001);
    }

    #[test]
    fn test_ghost_hit() {
        let layout = ChromeLayout::ghost(Rect::new(100.0, 100.0, 500.0, 120.0));

        assert_eq!(layout.hit(Vec2::new(110.0, 110.0)), Some(WindowRegion::GhostGrip));
        let close = layout.close_button;
        assert_eq!(
            layout.hit(Vec2::new(close.x + 1.0, close.y + 1.0)),
            Some(WindowRegion::CloseButton)
        );
        assert_eq!(layout.hit(Vec2::new(300.0, 200.0)), Some(WindowRegion::Content));
        // Bar row to the right of the buttons is see-through
        assert_eq!(layout.hit(Vec2::new(400.0, 110.0)), None);
    }
}
