//! Frame style constants

/// Chrome metrics shared by hit testing and the frame view
pub struct FrameStyle {
    /// Height of the opaque title bar (drag grip)
    pub title_bar_height: f32,
    /// Square close button inside the title bar
    pub close_button_size: f32,
    /// Distance of the close button from the right edge
    pub close_button_margin: f32,
    /// Square resize handle in the bottom-right corner
    pub resize_handle_size: f32,
    /// Height of the floating affordance above a ghost window
    pub ghost_bar_height: f32,
    /// Width of the ghost move grip
    pub ghost_grip_width: f32,
    /// Gap between the ghost affordance and the content below it
    pub ghost_bar_gap: f32,
}

/// Default frame style matching the whiteboard UI
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 40.0,
    close_button_size: 28.0,
    close_button_margin: 8.0,
    resize_handle_size: 20.0,
    ghost_bar_height: 32.0,
    ghost_grip_width: 32.0,
    ghost_bar_gap: 4.0,
};

/// z-index of the free-hand drawing overlay
pub const DRAWING_OVERLAY_Z: u32 = 40;

/// z-index of the fixed launcher toolbar
pub const LAUNCHER_Z: u32 = 60;
