//! Input routing module
//!
//! Drag and resize state machines, the router that keys them by pointer,
//! and the scoped listener guard hosts use while a gesture is in flight.

mod drag;
mod resize;
mod router;
mod result;
mod listeners;

pub use drag::{clamp_drag_position, DragController};
pub use resize::{resized, ResizeController};
pub use router::{Commit, InputRouter, Interaction, PointerId};
pub use result::InputResult;
pub use listeners::{ListenerHost, ListenerScope};
