//! Render descriptor for the whole desktop surface

use serde::Serialize;
use crate::background::BackgroundTheme;
use crate::math::{DRAWING_OVERLAY_Z, LAUNCHER_Z};
use crate::tool::{ToolKind, TOOL_CATALOG};
use super::FrameView;

/// One button in the launcher toolbar
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherEntry {
    pub kind: ToolKind,
    pub title: &'static str,
}

/// Everything the host needs to paint the desktop
///
/// `windows` is in registry order, not paint order. Stacking comes from
/// each frame's `z_index` alone.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopScene {
    pub background: BackgroundTheme,
    /// Light-on-dark chrome
    pub dark: bool,
    pub launcher: Vec<LauncherEntry>,
    pub launcher_z: u32,
    pub drawing_overlay_z: u32,
    pub windows: Vec<FrameView>,
}

impl DesktopScene {
    pub fn new(background: BackgroundTheme, windows: Vec<FrameView>) -> Self {
        Self {
            background,
            dark: background.is_dark(),
            launcher: launcher_entries(),
            launcher_z: LAUNCHER_Z,
            drawing_overlay_z: DRAWING_OVERLAY_Z,
            windows,
        }
    }

    /// Frame that paints on top
    pub fn topmost(&self) -> Option<&FrameView> {
        self.windows.iter().max_by_key(|f| f.z_index)
    }
}

/// Launcher buttons for every tool, in catalog order
pub fn launcher_entries() -> Vec<LauncherEntry> {
    TOOL_CATALOG
        .iter()
        .map(|spec| LauncherEntry {
            kind: spec.kind,
            title: spec.title,
        })
        .collect()
}
