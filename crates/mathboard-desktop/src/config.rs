//! Tunable constants for placement, clamping and stacking

use serde::{Deserialize, Serialize};
use crate::error::DesktopError;
use crate::math::Size;

/// Desktop configuration
///
/// Every field has a default, so hosts may supply a partial JSON document
/// and only override what they need.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Smallest size a resize can produce
    pub min_window_size: Size,
    /// Pixels of a dragged window that must stay reachable at each edge
    pub drag_edge_margin: f32,
    /// Smallest left coordinate of a freshly opened window
    pub open_min_left: f32,
    /// Smallest top coordinate of a freshly opened window (header bar)
    pub open_min_top: f32,
    /// Maximum absolute jitter applied on each axis when opening
    pub open_jitter: f32,
    /// Default window width is capped at this fraction of the viewport
    pub default_max_width_fraction: f32,
    /// Default window height is capped at this fraction of the viewport
    pub default_max_height_fraction: f32,
    /// Opaque frames never render wider than this fraction of the viewport
    pub render_max_width_fraction: f32,
    /// Opaque frames never render taller than this fraction of the viewport
    pub render_max_height_fraction: f32,
    /// Initial top-z value, above every fixed chrome layer
    pub z_seed: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            min_window_size: Size::new(280.0, 200.0),
            drag_edge_margin: 50.0,
            open_min_left: 10.0,
            open_min_top: 80.0,
            open_jitter: 20.0,
            default_max_width_fraction: 0.95,
            default_max_height_fraction: 0.85,
            render_max_width_fraction: 0.98,
            render_max_height_fraction: 0.90,
            z_seed: 100,
        }
    }
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }
}
