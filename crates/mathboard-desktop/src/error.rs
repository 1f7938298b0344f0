//! Errors at the desktop boundary
//!
//! Window operations themselves are total: an unknown window id is a silent
//! no-op. These errors only arise when the host hands in strings or JSON that
//! do not name anything the desktop knows about.

/// Errors raised when parsing host input.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// Tool id does not match any catalog entry.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Background id does not match any theme.
    #[error("unknown background: {0}")]
    UnknownBackground(String),

    /// Configuration document could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
