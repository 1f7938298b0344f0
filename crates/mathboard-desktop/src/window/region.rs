//! Window region for hit testing

use serde::Serialize;

/// Region of a window frame under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowRegion {
    /// Title bar of an opaque window (drag grip)
    TitleBar,
    /// Floating move handle of a ghost window (drag grip)
    GhostGrip,
    /// Close button (either chrome)
    CloseButton,
    /// Bottom-right resize handle (opaque windows only)
    ResizeHandle,
    /// Tool content
    Content,
}

impl WindowRegion {
    /// Check if a pointer-down here starts a drag
    #[inline]
    pub fn is_grip(&self) -> bool {
        matches!(self, WindowRegion::TitleBar | WindowRegion::GhostGrip)
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar | WindowRegion::GhostGrip => "move",
            WindowRegion::CloseButton => "pointer",
            WindowRegion::ResizeHandle => "nwse-resize",
            WindowRegion::Content => "default",
        }
    }
}
