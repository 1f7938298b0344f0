//! Geometry primitives for the whiteboard surface
//!
//! All coordinates are desktop-surface pixels with the origin at the
//! top-left corner of the page.

mod vec2;
mod size;
mod rect;
mod style;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
pub use style::{FrameStyle, FRAME_STYLE, DRAWING_OVERLAY_Z, LAUNCHER_Z};
