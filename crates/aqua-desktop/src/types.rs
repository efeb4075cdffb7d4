//! Core type definitions for the desktop
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Window handle
///
/// Windows live in a fixed-capacity arena and are never removed while the
/// session runs, so a handle is simply the window's index in creation
/// order. Higher handles are drawn on top and win hit-tests.
pub type WindowId = usize;

/// 32-bit ARGB color
///
/// The alpha byte is carried through but never blended: pixels are
/// written verbatim.
pub type Color = u32;
