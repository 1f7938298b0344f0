//! Active interactions keyed by pointer

use std::collections::HashMap;

use crate::math::{Size, Vec2};
use crate::window::WindowId;
use super::{DragController, ResizeController};

/// Pointer identifier as reported by the host (`PointerEvent.pointerId`)
pub type PointerId = i32;

/// One in-flight gesture on one window
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    /// Moving a window by its grip
    Drag {
        window_id: WindowId,
        controller: DragController,
    },
    /// Resizing a window by its corner handle
    Resize {
        window_id: WindowId,
        controller: ResizeController,
    },
}

impl Interaction {
    /// Window this gesture applies to
    #[inline]
    pub fn window_id(&self) -> &WindowId {
        match self {
            Interaction::Drag { window_id, .. } | Interaction::Resize { window_id, .. } => window_id,
        }
    }

    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, Interaction::Drag { .. })
    }

    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Interaction::Resize { .. })
    }
}

/// Geometry to write back to the registry when a gesture ends
#[derive(Clone, Debug, PartialEq)]
pub enum Commit {
    Move { window_id: WindowId, position: Vec2 },
    Resize { window_id: WindowId, size: Size },
}

/// Input router tracking every active gesture
///
/// Gestures are keyed by pointer so two fingers can drag two different
/// windows at once. A window takes part in at most one gesture.
#[derive(Debug, Default)]
pub struct InputRouter {
    active: HashMap<PointerId, Interaction>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a drag already begun on `window_id`
    ///
    /// Returns false if the pointer or the window is already busy, or if the
    /// controller is idle.
    pub fn start_drag(&mut self, pointer: PointerId, window_id: WindowId, controller: DragController) -> bool {
        if !controller.is_dragging() || !self.is_free(pointer, &window_id) {
            return false;
        }
        self.active.insert(pointer, Interaction::Drag { window_id, controller });
        true
    }

    /// Track a resize already begun on `window_id`
    ///
    /// Returns false if the pointer or the window is already busy, or if the
    /// controller is idle.
    pub fn start_resize(&mut self, pointer: PointerId, window_id: WindowId, controller: ResizeController) -> bool {
        if !controller.is_resizing() || !self.is_free(pointer, &window_id) {
            return false;
        }
        self.active.insert(pointer, Interaction::Resize { window_id, controller });
        true
    }

    /// Gesture driven by `pointer`
    #[inline]
    pub fn get(&self, pointer: PointerId) -> Option<&Interaction> {
        self.active.get(&pointer)
    }

    /// Gesture driven by `pointer`, for feeding it a move
    #[inline]
    pub fn get_mut(&mut self, pointer: PointerId) -> Option<&mut Interaction> {
        self.active.get_mut(&pointer)
    }

    /// End the gesture of `pointer`, returning what to commit
    pub fn finish(&mut self, pointer: PointerId) -> Option<Commit> {
        match self.active.remove(&pointer)? {
            Interaction::Drag { window_id, mut controller } => controller
                .finish()
                .map(|position| Commit::Move { window_id, position }),
            Interaction::Resize { window_id, mut controller } => controller
                .finish()
                .map(|size| Commit::Resize { window_id, size }),
        }
    }

    /// Drop any gesture on a window that is going away, without committing
    pub fn discard_window(&mut self, window_id: &WindowId) {
        self.active.retain(|_, interaction| interaction.window_id() != window_id);
    }

    /// Gesture currently applied to `window_id`
    pub fn for_window(&self, window_id: &WindowId) -> Option<&Interaction> {
        self.active.values().find(|i| i.window_id() == window_id)
    }

    /// Live origin of a window being dragged
    pub fn live_position(&self, window_id: &WindowId) -> Option<Vec2> {
        match self.for_window(window_id)? {
            Interaction::Drag { controller, .. } => controller.live_position(),
            Interaction::Resize { .. } => None,
        }
    }

    /// Live size of a window being resized
    pub fn live_size(&self, window_id: &WindowId) -> Option<Size> {
        match self.for_window(window_id)? {
            Interaction::Resize { controller, .. } => controller.live_size(),
            Interaction::Drag { .. } => None,
        }
    }

    /// Check if any gesture is in flight
    #[inline]
    pub fn is_interacting(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of gestures in flight
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// End every gesture without committing
    pub fn cancel_all(&mut self) {
        self.active.clear();
    }

    fn is_free(&self, pointer: PointerId, window_id: &WindowId) -> bool {
        !self.active.contains_key(&pointer) && self.for_window(window_id).is_none()
    }
}
