use serde::{Deserialize, Serialize};

use super::WindowKind;
use crate::math::Rect;

/// Everything needed to open a window: what it hosts, where, and its title
///
/// Dock icons carry one of these as their launch action, and the command
/// interpreter hands them over when asked to open something. Both go
/// through [`WindowManager::launch`](super::WindowManager::launch).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// Application hosted by the window
    pub kind: WindowKind,
    /// Initial frame in screen coordinates
    pub frame: Rect,
    /// Title bar text
    pub title: String,
}

impl LaunchSpec {
    /// Create a launch spec
    pub fn new(kind: WindowKind, frame: Rect, title: impl Into<String>) -> Self {
        Self {
            kind,
            frame,
            title: title.into(),
        }
    }
}
