//! Overlay module
//!
//! Full-screen surfaces that take every key and click while shown.

mod login;

pub use login::{LoginField, LoginOverlay, LOGIN_FAILED, MAX_FIELD_LEN};

use crate::input::KeySymbol;
use crate::math::Point;
use crate::render::Canvas;

/// A modal layer drawn over the desktop background
pub trait Overlay {
    /// Receive this frame's key
    fn handle_key(&mut self, key: KeySymbol);

    /// Receive a left-button press
    fn handle_click(&mut self, p: Point);

    /// Paint the overlay
    fn render(&self, canvas: &mut dyn Canvas);

    /// Whether the overlay has finished and should be removed
    fn is_dismissed(&self) -> bool;
}
