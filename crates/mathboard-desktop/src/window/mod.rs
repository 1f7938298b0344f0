//! Window management module
//!
//! Provides the window model, the registry that owns every open window,
//! chrome layout and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod chrome;
mod region;
mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};
use crate::tool::ToolKind;

pub use window::Window;
pub use chrome::ChromeLayout;
pub use region::WindowRegion;
pub use registry::WindowRegistry;

/// Unique window identifier
///
/// Built from the tool id and the creation timestamp, e.g. `ruler-1718000000000`.
/// Not a secret and not guaranteed unique across sessions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Id for a window of `kind` created at `now_ms`; `attempt` > 1 adds a suffix
    pub(crate) fn stamped(kind: ToolKind, now_ms: f64, attempt: u32) -> Self {
        // `as` saturates, so a bogus clock still yields a usable id
        let stamp = now_ms as u64;
        if attempt <= 1 {
            Self(format!("{}-{}", kind.id(), stamp))
        } else {
            Self(format!("{}-{}-{}", kind.id(), stamp, attempt))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_id_combines_tool_and_time() {
        let id = WindowId::stamped(ToolKind::Ruler, 1_718_000_000_123.0, 1);
        assert_eq!(id.as_str(), "ruler-1718000000123");
    }

    #[test]
    fn test_stamped_id_suffix_on_retry() {
        let id = WindowId::stamped(ToolKind::NumberLine, 42.9, 3);
        assert_eq!(id.to_string(), "number-line-42-3");
    }

    #[test]
    fn test_bogus_clock_saturates() {
        let id = WindowId::stamped(ToolKind::Dice, f64::NAN, 1);
        assert_eq!(id.as_str(), "dice-0");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = WindowId::from("clock-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"clock-7\"");
    }
}
