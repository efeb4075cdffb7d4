//! Error types for the desktop
//!
//! Every failure in this crate is recoverable: the session loop logs the
//! error and carries on with the next frame.

use crate::types::WindowId;

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// The window table is at capacity
    WindowTableFull {
        /// Fixed capacity of the table
        capacity: usize,
    },

    /// Window with the given handle does not exist
    WindowNotFound(WindowId),

    /// Dock slot index is outside the fixed slot array
    DockSlotOutOfBounds {
        /// The requested slot
        index: usize,
        /// Number of slots
        count: usize,
    },

    /// A configuration value is unusable
    InvalidConfig {
        /// Dotted path of the offending field
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Configuration text failed to parse
    ConfigParse(String),

    /// Pixel buffer is smaller than its declared geometry
    FramebufferTooSmall {
        /// Pixels required by width, height and pitch
        required: usize,
        /// Pixels actually supplied
        actual: usize,
    },
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowTableFull { capacity } => {
                write!(f, "window table full (capacity: {})", capacity)
            }
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::DockSlotOutOfBounds { index, count } => {
                write!(f, "dock slot {} out of bounds (count: {})", index, count)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {}", msg),
            Self::FramebufferTooSmall { required, actual } => write!(
                f,
                "framebuffer too small: need {} pixels, got {}",
                required, actual
            ),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
