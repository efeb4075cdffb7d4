//! Integer geometry for the framebuffer
//!
//! All coordinates are whole pixels in screen space, origin top-left.

mod point;
mod rect;
mod size;

pub use point::{isqrt, Point};
pub use rect::Rect;
pub use size::Size;
