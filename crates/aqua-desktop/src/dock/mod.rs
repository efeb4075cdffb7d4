//! Dock module
//!
//! A fixed row of launcher icons that magnify as the pointer approaches and
//! open windows when clicked.

#[allow(clippy::module_inception)]
mod dock;
mod geometry;
mod icon;

pub use dock::Dock;
pub use geometry::DockGeometry;
pub use icon::DockIcon;

/// Number of launcher slots
pub const DOCK_SLOTS: usize = 4;
