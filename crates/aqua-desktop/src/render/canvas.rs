use crate::math::{Point, Rect, Size};
use crate::types::Color;

/// Width of one glyph cell, and the pen advance per character
pub const GLYPH_ADVANCE: i32 = 8;

/// Drawing surface every painter writes through
///
/// Implementations clip to their own bounds, so callers may pass
/// rectangles that hang off any edge.
pub trait Canvas {
    /// Surface dimensions in pixels
    fn size(&self) -> Size;

    /// Fill a rectangle with a solid color, clipped to the surface
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text with its top-left at `origin`
    fn draw_text(&mut self, origin: Point, text: &str, color: Color);

    /// Write a single pixel
    fn put_pixel(&mut self, p: Point, color: Color) {
        self.fill_rect(Rect::new(p.x, p.y, 1, 1), color);
    }

    /// The whole surface as a rectangle
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(Point::ZERO, self.size())
    }
}
