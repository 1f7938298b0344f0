//! Render descriptors handed to the page
//!
//! The core never touches the DOM. It describes every frame and the surface
//! around them; the host turns these into elements and styles.

mod frame;
mod surface;

pub use frame::{render_rect, ContentProps, FrameChrome, FrameView};
pub use surface::{launcher_entries, DesktopScene, LauncherEntry};
