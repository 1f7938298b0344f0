//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: the desktop operations (open, close, focus, move, resize, ...)
//! - `input`: pointer event handling and drag/resize gestures
//! - `rendering`: live geometry and render descriptors

mod windows;
mod input;
mod rendering;

use crate::config::DesktopConfig;
use crate::input::InputRouter;
use crate::placement::{JitterSource, RandomJitter};
use crate::viewport::Viewport;
use crate::window::WindowRegistry;

/// Desktop engine: the single owner of all desktop state
///
/// Hosts hold one engine and route every user action through it:
/// - Window registry (window list, top-z counter, transparency, background)
/// - Input router (in-flight drag/resize gestures, keyed by pointer)
/// - Viewport (refreshed by the host from the live page size)
///
/// Views never mutate windows directly; they read [`DesktopEngine::scene`]
/// and call back into the engine.
pub struct DesktopEngine {
    /// Tunable constants
    pub config: DesktopConfig,
    /// Visible page area
    pub viewport: Viewport,
    /// Window registry
    pub windows: WindowRegistry,
    /// Input router
    pub input: InputRouter,
    /// Offset source for newly opened windows
    jitter: Box<dyn JitterSource>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a desktop engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create a desktop engine with a custom configuration
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            windows: WindowRegistry::new(config.z_seed, config.min_window_size),
            viewport: Viewport::default(),
            input: InputRouter::new(),
            jitter: Box::new(RandomJitter),
            config,
        }
    }

    /// Replace the jitter source (deterministic placement in tests)
    pub fn with_jitter(mut self, jitter: impl JitterSource + 'static) -> Self {
        self.jitter = Box::new(jitter);
        self
    }

    /// Update the viewport from the live page size
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }
}
