//! Window management module
//!
//! Provides window lifecycle, focus, hit testing and the drag/resize
//! gesture state machine.

mod kind;
mod launch;
mod manager;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use kind::WindowKind;
pub use launch::LaunchSpec;
pub use manager::{WindowManager, WindowMetrics};
pub use region::{ResizeMode, WindowRegion};
pub use window::{Interaction, Window, CONTENT_TOP, MAX_TITLE_LEN};

pub use crate::types::WindowId;
