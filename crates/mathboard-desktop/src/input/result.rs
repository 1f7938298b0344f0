//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
///
/// Anything other than `Unhandled` means the event belonged to a window and
/// must not reach the desktop surface underneath.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input missed every window (a desktop click)
    Unhandled,
    /// Input hit a window already in a gesture driven by another pointer
    Busy,
    /// Input landed on tool content and should be forwarded to it
    Forward {
        /// Target window
        #[serde(rename = "windowId")]
        window_id: WindowId,
        /// X coordinate in content-local space
        #[serde(rename = "localX")]
        local_x: f32,
        /// Y coordinate in content-local space
        #[serde(rename = "localY")]
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was consumed by a window
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Busy | InputResult::Forward { .. })
    }
}
