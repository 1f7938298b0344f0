//! Render descriptor for one window frame

use serde::Serialize;
use crate::config::DesktopConfig;
use crate::math::{Rect, Size};
use crate::tool::ToolKind;
use crate::viewport::Viewport;
use crate::window::{ChromeLayout, Window, WindowId};

/// What the hosted tool component receives
///
/// The matching setter is [`DesktopEngine::set_transparent`](crate::DesktopEngine::set_transparent),
/// which a ruler or protractor calls from its own UI.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProps {
    pub window_id: WindowId,
    pub kind: ToolKind,
    pub is_transparent: bool,
}

/// Chrome variant of a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameChrome {
    /// Title bar, close button, scrolling content, resize handle
    Opaque,
    /// Content only, with a floating move/close affordance
    Ghost,
}

/// One window as the host should draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    pub id: WindowId,
    pub title: &'static str,
    pub chrome: FrameChrome,
    /// Live geometry; for opaque frames capped to the render fractions
    pub rect: Rect,
    pub z_index: u32,
    /// Topmost window on the desktop
    pub focused: bool,
    /// A drag or resize of this window is in flight
    pub interacting: bool,
    pub layout: ChromeLayout,
    pub content: ContentProps,
}

impl FrameView {
    /// Describe `window` drawn at `live` geometry
    pub fn new(
        window: &Window,
        live: Rect,
        viewport: &Viewport,
        config: &DesktopConfig,
        focused: bool,
        interacting: bool,
    ) -> Self {
        let (chrome, rect, layout) = if window.transparent {
            (FrameChrome::Ghost, live, ChromeLayout::ghost(live))
        } else {
            let rect = render_rect(live, viewport, config);
            (FrameChrome::Opaque, rect, ChromeLayout::opaque(rect))
        };

        Self {
            id: window.id.clone(),
            title: window.title(),
            chrome,
            rect,
            z_index: window.z_index,
            focused,
            interacting,
            layout,
            content: ContentProps {
                window_id: window.id.clone(),
                kind: window.kind,
                is_transparent: window.transparent,
            },
        }
    }

    /// Whether the frame shows a resize handle
    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.layout.resize_handle.is_some()
    }
}

/// Cap an opaque frame to the render fractions of the viewport
///
/// The model may hold a larger size than this; only the drawing is capped.
pub fn render_rect(rect: Rect, viewport: &Viewport, config: &DesktopConfig) -> Rect {
    let cap: Size = viewport.size.fraction(
        config.render_max_width_fraction,
        config.render_max_height_fraction,
    );
    Rect::from_pos_size(rect.position(), rect.size().at_most(cap))
}
