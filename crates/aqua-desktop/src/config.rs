//! Desktop configuration
//!
//! Every tunable the desktop uses, grouped by component. Defaults
//! reproduce the stock 800x600 AquaOS desktop; a JSON document can
//! override any subset of fields.
//!
//! ```rust
//! use aqua_desktop::DesktopConfig;
//!
//! let config = DesktopConfig::from_json(r#"{ "dock": { "decay_step": 4 } }"#).unwrap();
//! assert_eq!(config.dock.decay_step, 4);
//! assert_eq!(config.dock.base_icon_size, 48);
//! ```

use serde::{Deserialize, Serialize};

use crate::dock::DOCK_SLOTS;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size};
use crate::types::Color;
use crate::window::{LaunchSpec, WindowKind};

/// Top-level desktop configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub screen: ScreenConfig,
    pub windows: WindowsConfig,
    pub dock: DockConfig,
    pub frame: FrameConfig,
    pub launch: LaunchConfig,
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(text: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the desktop cannot run with
    pub fn validate(&self) -> DesktopResult<()> {
        if self.screen.width <= 0 || self.screen.height <= 0 {
            return Err(invalid("screen", "dimensions must be positive"));
        }
        if self.windows.capacity == 0 {
            return Err(invalid("windows.capacity", "must be at least 1"));
        }
        if self.windows.min_width <= 0 || self.windows.min_height <= 0 {
            return Err(invalid("windows.min_width", "minimum size must be positive"));
        }
        if self.windows.resize_band <= 0 {
            return Err(invalid("windows.resize_band", "must be positive"));
        }
        if self.windows.title_bar_height <= 0 {
            return Err(invalid("windows.title_bar_height", "must be positive"));
        }
        if self.dock.base_icon_size <= 0 {
            return Err(invalid("dock.base_icon_size", "must be positive"));
        }
        if self.dock.max_icon_size < self.dock.base_icon_size {
            return Err(invalid(
                "dock.max_icon_size",
                "must not be below base_icon_size",
            ));
        }
        if self.dock.magnify_radius <= 0 {
            return Err(invalid("dock.magnify_radius", "must be positive"));
        }
        if self.dock.decay_step <= 0 {
            return Err(invalid("dock.decay_step", "must be positive"));
        }
        if self.dock.width > self.screen.width || self.dock.height > self.screen.height {
            return Err(invalid("dock.width", "dock does not fit on screen"));
        }
        if self.launch.startup.iter().any(|s| s.dock_slot.is_some_and(|i| i >= DOCK_SLOTS)) {
            return Err(invalid("launch.startup.dock_slot", "no such dock slot"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> DesktopError {
    DesktopError::InvalidConfig { field, reason }
}

/// Framebuffer geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
}

impl ScreenConfig {
    /// Screen size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Window table and chrome metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Fixed number of window slots
    pub capacity: usize,
    pub min_width: i32,
    pub min_height: i32,
    /// Height of the draggable band at the top of a window
    pub title_bar_height: i32,
    /// Width of the resize band along the right and bottom edges
    pub resize_band: i32,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            min_width: 200,
            min_height: 150,
            title_bar_height: 30,
            resize_band: 8,
        }
    }
}

/// Launcher strip geometry and animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub width: i32,
    pub height: i32,
    /// Gap between the dock and the bottom of the screen
    pub bottom_margin: i32,
    pub base_icon_size: i32,
    pub max_icon_size: i32,
    pub icon_gap: i32,
    /// Offset of the first icon from the dock's left edge
    pub padding_left: i32,
    /// Offset of the icon row from the dock's top edge
    pub icon_top: i32,
    /// How far above the dock the pointer still magnifies icons
    pub proximity_band: i32,
    /// Distance at which magnification falls to zero
    pub magnify_radius: i32,
    /// Pixels an icon shrinks per frame when not magnified
    pub decay_step: i32,
    pub icons: [DockIconConfig; DOCK_SLOTS],
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 90,
            bottom_margin: 10,
            base_icon_size: 48,
            max_icon_size: 72,
            icon_gap: 16,
            padding_left: 24,
            icon_top: 20,
            proximity_band: 20,
            magnify_radius: 80,
            decay_step: 2,
            icons: [
                DockIconConfig::new(
                    "Finder",
                    0xFF1E90FF,
                    LaunchSpec::new(
                        WindowKind::FileBrowser,
                        Rect::new(200, 100, 450, 380),
                        "Finder",
                    ),
                ),
                DockIconConfig::new(
                    "Safari",
                    0xFF87CEEB,
                    LaunchSpec::new(
                        WindowKind::FileBrowser,
                        Rect::new(180, 120, 500, 400),
                        "Safari",
                    ),
                ),
                DockIconConfig::new(
                    "Terminal",
                    0xFF2C2C2C,
                    LaunchSpec::new(
                        WindowKind::Terminal,
                        Rect::new(120, 150, 500, 320),
                        "Terminal",
                    ),
                ),
                DockIconConfig::new(
                    "Settings",
                    0xFF9E9E9E,
                    LaunchSpec::new(
                        WindowKind::About,
                        Rect::new(250, 200, 380, 250),
                        "About AquaOS",
                    ),
                ),
            ],
        }
    }
}

/// One launcher slot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockIconConfig {
    pub label: String,
    pub color: Color,
    pub launch: LaunchSpec,
}

impl DockIconConfig {
    /// Create a slot description
    pub fn new(label: impl Into<String>, color: Color, launch: LaunchSpec) -> Self {
        Self {
            label: label.into(),
            color,
            launch,
        }
    }
}

/// Loop pacing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Busy-wait iterations between frames
    pub spin_iterations: u32,
    /// Frames between clock refreshes of the top bar
    pub clock_interval: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            spin_iterations: 10_000,
            clock_interval: 1_000,
        }
    }
}

/// Windows opened outside the dock
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Window opened when the terminal asks for the editor
    pub editor: LaunchSpec,
    /// Windows opened once the desktop appears
    pub startup: Vec<StartupLaunch>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            editor: LaunchSpec::new(WindowKind::Editor, Rect::new(100, 80, 600, 400), "Editor"),
            startup: vec![StartupLaunch {
                launch: LaunchSpec::new(
                    WindowKind::Terminal,
                    Rect::new(150, 120, 500, 350),
                    "Terminal",
                ),
                dock_slot: Some(2),
            }],
        }
    }
}

/// A window opened at desktop start, optionally lighting a dock icon
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupLaunch {
    pub launch: LaunchSpec,
    /// Dock slot to mark running when the launch succeeds
    pub dock_slot: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = DesktopConfig::default();
        config.validate().unwrap();
        assert_eq!(config.screen.size(), Size::new(800, 600));
        assert_eq!(config.windows.capacity, 10);
        assert_eq!(config.dock.icons[2].launch.kind, WindowKind::Terminal);
        assert_eq!(config.launch.startup.len(), 1);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = DesktopConfig::from_json(
            r#"{
                "windows": { "capacity": 3 },
                "frame": { "clock_interval": 50 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.windows.capacity, 3);
        assert_eq!(config.windows.min_width, 200);
        assert_eq!(config.frame.clock_interval, 50);
        assert_eq!(config.frame.spin_iterations, 10_000);
    }

    #[test]
    fn test_launch_spec_json() {
        let config = DesktopConfig::from_json(
            r#"{
                "launch": {
                    "editor": {
                        "kind": "editor",
                        "frame": { "x": 1, "y": 2, "width": 300, "height": 200 },
                        "title": "Notes"
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.launch.editor.title, "Notes");
        assert_eq!(config.launch.editor.frame, Rect::new(1, 2, 300, 200));
        // Unspecified sibling falls back to its default
        assert_eq!(config.launch.startup.len(), 1);
    }

    #[test]
    fn test_invalid_dock_sizes() {
        let err = DesktopConfig::from_json(
            r#"{ "dock": { "base_icon_size": 64, "max_icon_size": 32 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DesktopError::InvalidConfig {
                field: "dock.max_icon_size",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_startup_slot() {
        let mut config = DesktopConfig::default();
        config.launch.startup[0].dock_slot = Some(DOCK_SLOTS);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = DesktopConfig::from_json(r#"{ "windows": { "capacity": 0 } }"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = DesktopConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DesktopError::ConfigParse(_)));
    }
}
