//! Live geometry and render descriptors

use crate::math::{Rect, Vec2};
use crate::view::{render_rect, DesktopScene, FrameView};
use crate::window::{ChromeLayout, Window, WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Geometry of a window as the user currently sees it
    ///
    /// During a drag or resize this is the gesture's live value, otherwise
    /// the committed one.
    pub fn live_rect(&self, id: &WindowId) -> Option<Rect> {
        self.windows.get(id).map(|window| self.live_geometry(window))
    }

    /// Chrome layout of a window where it is drawn right now
    pub fn frame_layout(&self, id: &WindowId) -> Option<ChromeLayout> {
        let window = self.windows.get(id)?;
        let frame = self.frame_rect(window);
        Some(if window.transparent {
            ChromeLayout::ghost(frame)
        } else {
            ChromeLayout::opaque(frame)
        })
    }

    /// Topmost window part under a surface position
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.windows.region_at(pos, |window| self.frame_rect(window))
    }

    /// Render descriptors for every open window, in registry order
    pub fn frame_views(&self) -> Vec<FrameView> {
        let focused = self.windows.focused();

        self.windows
            .windows()
            .iter()
            .map(|window| {
                FrameView::new(
                    window,
                    self.live_geometry(window),
                    &self.viewport,
                    &self.config,
                    focused == Some(&window.id),
                    self.input.for_window(&window.id).is_some(),
                )
            })
            .collect()
    }

    /// Everything the host needs to paint the desktop
    pub fn scene(&self) -> DesktopScene {
        DesktopScene::new(self.windows.background(), self.frame_views())
    }

    fn live_geometry(&self, window: &Window) -> Rect {
        let position = self.input.live_position(&window.id).unwrap_or(window.position);
        let size = self.input.live_size(&window.id).unwrap_or(window.size);
        Rect::from_pos_size(position, size)
    }

    /// Rectangle the frame occupies on screen; opaque frames are capped
    fn frame_rect(&self, window: &Window) -> Rect {
        let live = self.live_geometry(window);
        if window.transparent {
            live
        } else {
            render_rect(live, &self.viewport, &self.config)
        }
    }
}
