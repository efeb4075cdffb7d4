//! Desktop color palette (0xAARRGGBB)
//!
//! Alpha bits are carried through to the framebuffer untouched; nothing is
//! blended.

use crate::types::Color;

pub const WHITE: Color = 0xFFFFFFFF;
pub const BLACK: Color = 0xFF000000;
pub const ACCENT_BLUE: Color = 0xFF007AFF;
pub const ERROR_RED: Color = 0xFFFF3B30;

pub const TEXT_PRIMARY: Color = 0xFF1D1D1F;
pub const TEXT_SECONDARY: Color = 0xFF8E8E93;

pub const TOP_BAR: Color = 0xFFF5F5F7;
pub const TOP_BAR_TEXT: Color = 0xFF1D1D1F;

pub const WINDOW_BODY: Color = 0xFFFFFFFF;
pub const WINDOW_TITLE: Color = 0xFFFAFAFA;
pub const WINDOW_CONTENT: Color = 0xFFFAFAFA;
pub const SHADOW_AMBIENT: Color = 0x40000000;
pub const SHADOW_DIRECT: Color = 0x60000000;

/// Close, minimize and maximize buttons, left to right
pub const TITLE_BUTTONS: [Color; 3] = [0xFFFF5F56, 0xFFFFBD2E, 0xFF27C93F];

pub const DOCK_BACKGROUND: Color = 0xFFE5E5E5;
pub const DOCK_BORDER: Color = 0xFFCCCCCC;
pub const DOCK_ICON_SHADOW: Color = 0x33000000;
pub const DOCK_RUNNING_DOT: Color = 0xFF4A4A4A;

pub const FIELD_BORDER: Color = 0xFFE5E5E5;
