//! Floating tool windows for the Mathboard whiteboard
//!
//! This crate owns the desktop layer that sits above the drawing canvas:
//! - Opening tool windows from the launcher (centered, jittered, on top)
//! - Focus and z-order
//! - Dragging by the title bar or ghost grip, clamped so a window can always be reached
//! - Resizing from the bottom-right corner, with a minimum size
//! - Ghost (transparent) frames for overlay tools such as the ruler
//! - The desktop background theme
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and frame style constants
//! - [`tool`]: The tool catalog
//! - [`window`]: Window model, registry, chrome layout and hit testing
//! - [`input`]: Drag/resize state machines and pointer routing
//! - [`view`]: Render descriptors handed to the page
//! - [`placement`]: Where newly opened windows go
//!
//! ## Example
//!
//! ```rust
//! use mathboard_desktop::{DesktopEngine, ToolKind};
//!
//! let mut engine = DesktopEngine::new();
//! engine.set_viewport(1280.0, 800.0);
//!
//! let ruler = engine.open(ToolKind::Ruler, 1_718_000_000_000.0);
//! engine.focus(&ruler);
//!
//! let scene = engine.scene();
//! assert_eq!(scene.windows.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state lives in [`DesktopEngine`], testable without a browser
//! 2. **Injectable Sources**: Time and jitter are passed in, so placement is deterministic in tests
//! 3. **Commit on Release**: Drags and resizes only touch the registry when the pointer lets go

pub mod math;
pub mod tool;
pub mod window;
pub mod input;
pub mod view;
pub mod placement;

mod background;
mod config;
mod engine;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, FrameStyle, FRAME_STYLE};
pub use tool::{ToolKind, ToolSpec, TOOL_CATALOG};
pub use window::{ChromeLayout, Window, WindowId, WindowRegion, WindowRegistry};
pub use input::{InputResult, InputRouter, ListenerHost, ListenerScope, PointerId};
pub use view::{ContentProps, DesktopScene, FrameChrome, FrameView, LauncherEntry};
pub use placement::{FixedJitter, JitterSource, RandomJitter};

pub use background::BackgroundTheme;
pub use config::DesktopConfig;
pub use engine::DesktopEngine;
pub use error::DesktopError;
pub use viewport::Viewport;
