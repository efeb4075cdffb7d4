use crate::config::DockIconConfig;
use crate::math::Point;
use crate::types::Color;
use crate::window::LaunchSpec;

/// One launcher slot and its animation state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DockIcon {
    /// Display name
    pub label: String,
    /// Fill color
    pub color: Color,
    /// Window opened on click
    pub launch: LaunchSpec,
    pub(crate) base: Point,
    pub(crate) size: i32,
    pub(crate) running: bool,
}

impl DockIcon {
    pub(crate) fn new(config: &DockIconConfig, base: Point, size: i32) -> Self {
        Self {
            label: config.label.clone(),
            color: config.color,
            launch: config.launch.clone(),
            base,
            size,
            running: false,
        }
    }

    /// Top-left of the slot at rest
    pub fn base(&self) -> Point {
        self.base
    }

    /// Current animated edge length
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether the running indicator is lit
    pub fn is_running(&self) -> bool {
        self.running
    }
}
