//! Tool kinds that can be launched onto the whiteboard
//!
//! Every per-kind fact (title, default size, transparency default, content
//! id) lives in one table, [`TOOL_CATALOG`], indexed by [`ToolKind`].

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::DesktopError;
use crate::math::Size;

pub use catalog::TOOL_CATALOG;

/// Kind of tool hosted by a window. Immutable for the window's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    NumberLine,
    Ruler,
    Protractor,
    FractionBars,
    Calculator,
    Probability,
    Dice,
    Spinner,
    Clock,
    Timer,
    Geoboard,
    BaseTenBlocks,
    HundredChart,
    CoordinatePlane,
    Shapes,
    Money,
    TenFrame,
    PlaceValue,
    Thermometer,
    BalanceScale,
}

/// Static description of a tool kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolSpec {
    pub kind: ToolKind,
    /// Stable string id; also selects the content component on the host
    pub id: &'static str,
    /// Title shown in the window's title bar and the launcher
    pub title: &'static str,
    /// Preferred size before viewport clamping
    pub default_size: Size,
    /// Whether new windows of this kind start in ghost mode
    pub transparent_by_default: bool,
}

impl ToolKind {
    /// All tool kinds in launcher order
    pub fn all() -> impl Iterator<Item = ToolKind> {
        TOOL_CATALOG.iter().map(|spec| spec.kind)
    }

    /// Catalog entry for this kind
    #[inline]
    pub fn spec(self) -> &'static ToolSpec {
        &TOOL_CATALOG[self as usize]
    }

    #[inline]
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    #[inline]
    pub fn title(self) -> &'static str {
        self.spec().title
    }

    /// Parse from string id (e.g. "ruler", "number-line")
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase();
        TOOL_CATALOG.iter().find(|spec| spec.id == id).map(|spec| spec.kind)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ToolKind {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| DesktopError::UnknownTool(s.to_string()))
    }
}
