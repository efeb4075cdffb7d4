//! Rendering module
//!
//! The [`Canvas`] trait is the only way pixels leave the crate. A
//! [`Framebuffer`] backs it on hardware; tests substitute a recorder.

mod canvas;
pub mod chrome;
mod framebuffer;
mod scheduler;
pub mod theme;

pub use canvas::{Canvas, GLYPH_ADVANCE};
pub use framebuffer::{Framebuffer, GlyphTable};
pub use scheduler::{FramePlan, RenderScheduler};
