//! Desktop operations exposed to the launcher and to window frames

use crate::background::BackgroundTheme;
use crate::math::{Size, Vec2};
use crate::placement;
use crate::tool::ToolKind;
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a tool window, centered with a little jitter, on top of the others
    pub fn open(&mut self, kind: ToolKind, now_ms: f64) -> WindowId {
        let size = placement::default_size(kind, &self.viewport, &self.config);
        let jitter = self.jitter.jitter(self.config.open_jitter);
        let position = placement::open_position(size, jitter, &self.viewport, &self.config);

        self.windows.create(kind, position, size, now_ms)
    }

    /// Close a window, abandoning any gesture in flight on it
    pub fn close(&mut self, id: &WindowId) {
        self.input.discard_window(id);
        self.windows.close(id);
    }

    /// Bring a window to the top
    pub fn focus(&mut self, id: &WindowId) {
        self.windows.focus(id);
    }

    /// Commit a window position
    pub fn move_window(&mut self, id: &WindowId, x: f32, y: f32) {
        self.windows.move_window(id, Vec2::new(x, y));
    }

    /// Commit a window size (floored at the minimum window size)
    pub fn resize_window(&mut self, id: &WindowId, width: f32, height: f32) {
        self.windows.resize(id, Size::new(width, height));
    }

    /// Switch a window between opaque and ghost chrome
    ///
    /// Ghost windows have no resize handle, so a resize in flight is dropped.
    pub fn set_transparent(&mut self, id: &WindowId, transparent: bool) {
        if transparent && self.input.live_size(id).is_some() {
            self.input.discard_window(id);
        }
        self.windows.set_transparent(id, transparent);
    }

    /// Set the desktop background
    pub fn set_background(&mut self, theme: BackgroundTheme) {
        self.windows.set_background(theme);
    }
}
