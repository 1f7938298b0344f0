//! Pointer event handling and drag/resize gestures

use crate::input::{clamp_drag_position, Commit, DragController, InputResult, Interaction, PointerId, ResizeController};
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Start dragging a window from its grip
    ///
    /// Focuses the window. A gesture still held by `pointer` is committed
    /// first. Returns `Busy` if another pointer is already moving or resizing
    /// the window.
    pub fn start_drag(&mut self, id: &WindowId, pointer: PointerId, x: f32, y: f32) -> InputResult {
        if !self.windows.contains(id) {
            return InputResult::Unhandled;
        }
        self.settle_pointer(pointer);

        let (position, width) = match self.windows.get(id) {
            Some(window) => (window.position, window.size.width),
            None => return InputResult::Unhandled,
        };
        self.windows.focus(id);

        let mut controller = DragController::default();
        controller.begin(Vec2::new(x, y), position, width, &self.viewport, self.config.drag_edge_margin);
        if !self.input.start_drag(pointer, id.clone(), controller) {
            return InputResult::Busy;
        }
        InputResult::Handled
    }

    /// Start resizing a window from its corner handle
    ///
    /// Ghost windows cannot be resized. Same pointer rules as `start_drag`.
    pub fn start_resize(&mut self, id: &WindowId, pointer: PointerId, x: f32, y: f32) -> InputResult {
        if !self.windows.contains(id) {
            return InputResult::Unhandled;
        }
        self.settle_pointer(pointer);

        let size = match self.windows.get(id) {
            Some(window) if window.is_resizable() => window.size,
            Some(_) => return InputResult::Handled,
            None => return InputResult::Unhandled,
        };
        self.windows.focus(id);

        let mut controller = ResizeController::default();
        controller.begin(Vec2::new(x, y), size);
        if !self.input.start_resize(pointer, id.clone(), controller) {
            return InputResult::Busy;
        }
        InputResult::Handled
    }

    /// Commit a gesture whose release never arrived
    ///
    /// A fresh press on a pointer id means its previous gesture is over.
    fn settle_pointer(&mut self, pointer: PointerId) {
        if self.input.get(pointer).is_some() {
            tracing::debug!(pointer, "pressed again before release, committing previous gesture");
            self.handle_pointer_up(pointer);
        }
    }

    /// Handle pointer down anywhere on the surface
    pub fn handle_pointer_down(&mut self, pointer: PointerId, x: f32, y: f32) -> InputResult {
        self.settle_pointer(pointer);

        let pos = Vec2::new(x, y);
        let (window_id, region) = match self.region_at(pos) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::CloseButton => {
                self.close(&window_id);
                InputResult::Handled
            }
            region if region.is_grip() => self.start_drag(&window_id, pointer, x, y),
            WindowRegion::ResizeHandle => self.start_resize(&window_id, pointer, x, y),
            _ => self.handle_content_click(window_id, pos),
        }
    }

    /// Any click on a window raises it; content clicks go to the tool
    fn handle_content_click(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.windows.focus(&window_id);

        let origin = match self.frame_layout(&window_id) {
            Some(layout) => layout.content.position(),
            None => return InputResult::Unhandled,
        };
        let local = pos - origin;
        InputResult::Forward {
            window_id,
            local_x: local.x,
            local_y: local.y,
        }
    }

    /// Handle pointer move from the page-wide listener
    pub fn handle_pointer_move(&mut self, pointer: PointerId, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        let window_id = match self.input.get(pointer) {
            Some(interaction) => interaction.window_id().clone(),
            None => return InputResult::Unhandled,
        };
        let window_size = match self.windows.get(&window_id) {
            Some(window) => window.size,
            None => {
                self.input.discard_window(&window_id);
                return InputResult::Unhandled;
            }
        };

        let viewport = self.viewport;
        let margin = self.config.drag_edge_margin;
        let min_size = self.config.min_window_size;

        match self.input.get_mut(pointer) {
            Some(Interaction::Drag { controller, .. }) => {
                controller.update(pos, window_size.width, &viewport, margin);
            }
            Some(Interaction::Resize { controller, .. }) => {
                controller.update(pos, min_size);
            }
            None => return InputResult::Unhandled,
        }
        InputResult::Handled
    }

    /// Handle pointer release: commit the gesture's final geometry
    ///
    /// Moves are clamped against the viewport as it is now, which may have
    /// shrunk since the last pointer move.
    pub fn handle_pointer_up(&mut self, pointer: PointerId) -> InputResult {
        match self.input.finish(pointer) {
            Some(Commit::Move { window_id, position }) => {
                let position = match self.windows.get(&window_id) {
                    Some(window) => clamp_drag_position(position, window.size.width, &self.viewport, self.config.drag_edge_margin),
                    None => position,
                };
                self.windows.move_window(&window_id, position);
                tracing::debug!(window = %window_id, x = position.x, y = position.y, "drag committed");
                InputResult::Handled
            }
            Some(Commit::Resize { window_id, size }) => {
                self.windows.resize(&window_id, size);
                tracing::debug!(window = %window_id, width = size.width, height = size.height, "resize committed");
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Pointer capture lost or pointer left the page: same as a release
    #[inline]
    pub fn handle_pointer_cancel(&mut self, pointer: PointerId) -> InputResult {
        self.handle_pointer_up(pointer)
    }
}
