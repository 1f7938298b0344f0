//! Window model

use serde::Serialize;
use crate::math::{Rect, Size, Vec2};
use crate::tool::ToolKind;
use super::WindowId;

/// One floating tool window
///
/// Pure data. Only [`WindowRegistry`](super::WindowRegistry) mutates it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Tool hosted by this window
    pub kind: ToolKind,
    /// Top-left corner in surface pixels (last committed value)
    pub position: Vec2,
    /// Dimensions (last committed value)
    pub size: Size,
    /// Stacking order (higher = on top)
    pub z_index: u32,
    /// Ghost mode: no chrome, content at intrinsic size
    pub transparent: bool,
}

impl Window {
    /// Bounding rectangle of the committed geometry
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Title for the chrome
    #[inline]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Whether this window shows a resize handle
    #[inline]
    pub fn is_resizable(&self) -> bool {
        !self.transparent
    }
}
