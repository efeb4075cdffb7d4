//! Linear 32-bit framebuffer over a borrowed pixel slice.

use super::canvas::{Canvas, GLYPH_ADVANCE};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Point, Rect, Size};
use crate::types::Color;

/// 8x8 bitmap font indexed by ASCII code; bit 7 of each row is the leftmost pixel
pub type GlyphTable = [[u8; 8]; 128];

/// A pixel buffer laid out row by row, `pitch` pixels apart
///
/// Colors are stored verbatim. Every write outside the visible
/// `width` x `height` area is dropped.
pub struct Framebuffer<'a> {
    pixels: &'a mut [u32],
    width: i32,
    height: i32,
    pitch: usize,
    glyphs: Option<&'a GlyphTable>,
}

impl<'a> Framebuffer<'a> {
    /// Wrap a pixel slice.
    ///
    /// `pitch` is the distance between rows in pixels and must be at least
    /// `width`. The slice must cover every visible pixel.
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32, pitch: u32) -> DesktopResult<Self> {
        if pitch < width {
            return Err(DesktopError::InvalidConfig {
                field: "framebuffer.pitch",
                reason: "pitch is narrower than width",
            });
        }
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(DesktopError::InvalidConfig {
                field: "framebuffer.width",
                reason: "dimensions out of range",
            });
        };

        let pitch = pitch as usize;
        let required = match height as usize {
            0 => 0,
            rows => (rows - 1) * pitch + width as usize,
        };
        if pixels.len() < required {
            return Err(DesktopError::FramebufferTooSmall {
                required,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width: w,
            height: h,
            pitch,
            glyphs: None,
        })
    }

    /// Enable text rendering with a platform font
    pub fn with_glyphs(mut self, glyphs: &'a GlyphTable) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    /// Read back a pixel, `None` outside the visible area
    pub fn pixel(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Fill the whole visible area
    pub fn clear(&mut self, color: Color) {
        let bounds = self.bounds();
        self.fill_rect(bounds, color);
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.pitch + p.x as usize)
    }

    fn draw_glyph(&mut self, glyphs: &GlyphTable, origin: Point, c: char, color: Color) {
        let idx = (c as u32).min(127) as usize;
        for (row, bits) in glyphs[idx].iter().enumerate() {
            for col in 0..8 {
                if (bits >> (7 - col)) & 1 == 1 {
                    self.put_pixel(origin + Point::new(col, row as i32), color);
                }
            }
        }
    }
}

impl Canvas for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = rect.intersection(&self.bounds()) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            let start = y as usize * self.pitch + clip.x as usize;
            self.pixels[start..start + clip.width as usize].fill(color);
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        let Some(glyphs) = self.glyphs else {
            return;
        };
        let mut pen = origin;
        for c in text.chars() {
            self.draw_glyph(glyphs, pen, c, color);
            pen.x = pen.x.saturating_add(GLYPH_ADVANCE);
        }
    }

    fn put_pixel(&mut self, p: Point, color: Color) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = color;
        }
    }
}
