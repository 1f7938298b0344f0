//! Desktop-wide background theme

use serde::{Deserialize, Serialize};
use crate::error::DesktopError;

/// Available background themes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    /// Squared paper
    #[default]
    Grid,
    /// Dot paper
    Dots,
    /// Plain whiteboard
    White,
    /// Chalkboard
    Black,
}

impl BackgroundTheme {
    /// Get all available themes
    pub fn all() -> &'static [BackgroundTheme] {
        &[
            BackgroundTheme::Grid,
            BackgroundTheme::Dots,
            BackgroundTheme::White,
            BackgroundTheme::Black,
        ]
    }

    /// Get the display name for this theme
    pub fn name(&self) -> &'static str {
        match self {
            BackgroundTheme::Grid => "Grid",
            BackgroundTheme::Dots => "Dots",
            BackgroundTheme::White => "Whiteboard",
            BackgroundTheme::Black => "Chalkboard",
        }
    }

    /// Parse from string ID (e.g., "grid", "dots")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "grid" => Some(BackgroundTheme::Grid),
            "dots" => Some(BackgroundTheme::Dots),
            "white" => Some(BackgroundTheme::White),
            "black" => Some(BackgroundTheme::Black),
            _ => None,
        }
    }

    /// Get the string ID for this theme
    pub fn id(&self) -> &'static str {
        match self {
            BackgroundTheme::Grid => "grid",
            BackgroundTheme::Dots => "dots",
            BackgroundTheme::White => "white",
            BackgroundTheme::Black => "black",
        }
    }

    /// Whether windows and ink should use light-on-dark contrast
    pub fn is_dark(&self) -> bool {
        matches!(self, BackgroundTheme::Black)
    }
}

impl std::str::FromStr for BackgroundTheme {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| DesktopError::UnknownBackground(s.to_string()))
    }
}
