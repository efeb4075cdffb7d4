//! Painters for the fixed parts of the desktop: background, top bar,
//! window chrome and the pointer.

use super::{theme, Canvas};
use crate::math::{Point, Rect};
use crate::window::{Window, CONTENT_TOP};

/// Height of the menu bar across the top of the screen
pub const TOP_BAR_HEIGHT: i32 = 28;

const CURSOR_HEIGHT: i32 = 16;
const CURSOR_WIDTH: i32 = 10;

/// Diagonal gradient over the whole canvas, pink at the top fading to
/// blue-purple at the bottom with a slight horizontal warm shift.
pub fn paint_background(canvas: &mut dyn Canvas) {
    let size = canvas.size();
    if size.width <= 0 || size.height <= 0 {
        return;
    }
    for y in 0..size.height {
        let ny = (y as u32 * 255) / size.height as u32;
        for x in 0..size.width {
            let nx = (x as u32 * 255) / size.width as u32;
            canvas.put_pixel(Point::new(x, y), gradient(nx, ny));
        }
    }
}

fn gradient(nx: u32, ny: u32) -> u32 {
    let r = (255 - (ny * 155) / 255 + (nx * 20) / 255) & 0xFF;
    let g = (200 - (ny * 100) / 255) & 0xFF;
    let b = (220 - (ny * 20) / 255 + (nx * 35) / 255) & 0xFF;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

/// Menu bar with the logo block and, when known, the clock at the right
pub fn paint_top_bar(canvas: &mut dyn Canvas, clock: Option<&str>) {
    let width = canvas.size().width;
    canvas.fill_rect(Rect::new(0, 0, width, TOP_BAR_HEIGHT), theme::TOP_BAR);
    canvas.fill_rect(Rect::new(16, 6, 16, 16), theme::BLACK);
    if let Some(text) = clock {
        canvas.draw_text(Point::new(width - 70, 8), text, theme::TOP_BAR_TEXT);
    }
}

/// Shadow, body, title bar, buttons, title text and the content
/// placeholder for one window.
pub fn paint_window(canvas: &mut dyn Canvas, window: &Window, active: bool) {
    let frame = window.frame;

    canvas.fill_rect(frame.expand(4), theme::SHADOW_AMBIENT);
    canvas.fill_rect(frame.expand(2), theme::SHADOW_DIRECT);
    canvas.fill_rect(frame, theme::WINDOW_BODY);
    canvas.fill_rect(
        Rect::new(frame.x, frame.y, frame.width, CONTENT_TOP),
        theme::WINDOW_TITLE,
    );

    for (i, color) in theme::TITLE_BUTTONS.iter().enumerate() {
        let button = Rect::new(frame.x, frame.y, 12, 12).offset(12 + 20 * i as i32, 7);
        canvas.fill_rect(button, *color);
    }

    let title_color = if active {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_SECONDARY
    };
    canvas.draw_text(frame.position() + Point::new(80, 8), &window.title, title_color);

    canvas.fill_rect(window.content_rect(), theme::WINDOW_CONTENT);
}

/// Arrow pointer with its hot spot at `p`
pub fn paint_cursor(canvas: &mut dyn Canvas, p: Point) {
    for row in 0..CURSOR_HEIGHT {
        let len = CURSOR_WIDTH - row / 2;
        if row < 2 {
            canvas.fill_rect(Rect::new(p.x, p.y + row, len, 1), theme::WHITE);
        } else {
            canvas.fill_rect(Rect::new(p.x, p.y + row, 2, 1), theme::WHITE);
            canvas.fill_rect(Rect::new(p.x + 2, p.y + row, len - 2, 1), theme::BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;
    use crate::render::Framebuffer;
    use crate::window::WindowKind;

    #[test]
    fn test_gradient_corners() {
        assert_eq!(gradient(0, 0), 0xFFFFC8DC);
        assert_eq!(gradient(0, 255), 0xFF6464C8);
    }

    #[test]
    fn test_background_covers_canvas() {
        let mut pixels = vec![0u32; 16 * 8];
        let mut fb = Framebuffer::new(&mut pixels, 16, 8, 16).unwrap();
        paint_background(&mut fb);
        assert!(pixels.iter().all(|p| p >> 24 == 0xFF));
    }

    #[test]
    fn test_window_chrome_layout() {
        let mut pixels = vec![0u32; 400 * 300];
        let mut fb = Framebuffer::new(&mut pixels, 400, 300, 400).unwrap();
        let window = Window::new(0, Rect::new(50, 50, 200, 150), "w", WindowKind::About);
        paint_window(&mut fb, &window, true);

        assert_eq!(fb.pixel(Point::new(46, 46)), Some(theme::SHADOW_AMBIENT));
        assert_eq!(fb.pixel(Point::new(48, 48)), Some(theme::SHADOW_DIRECT));
        assert_eq!(fb.pixel(Point::new(100, 55)), Some(theme::WINDOW_TITLE));
        assert_eq!(fb.pixel(Point::new(62, 57)), Some(theme::TITLE_BUTTONS[0]));
        assert_eq!(fb.pixel(Point::new(82, 57)), Some(theme::TITLE_BUTTONS[1]));
        assert_eq!(fb.pixel(Point::new(102, 57)), Some(theme::TITLE_BUTTONS[2]));
        // Left border column stays body white below the title bar
        assert_eq!(fb.pixel(Point::new(50, 120)), Some(theme::WINDOW_BODY));
        assert_eq!(fb.pixel(Point::new(120, 120)), Some(theme::WINDOW_CONTENT));
        assert_eq!(fb.size(), Size::new(400, 300));
    }

    #[test]
    fn test_cursor_shape() {
        let mut pixels = vec![0u32; 32 * 32];
        let mut fb = Framebuffer::new(&mut pixels, 32, 32, 32).unwrap();
        paint_cursor(&mut fb, Point::new(4, 4));

        assert_eq!(fb.pixel(Point::new(13, 4)), Some(theme::WHITE));
        assert_eq!(fb.pixel(Point::new(14, 4)), Some(0));
        assert_eq!(fb.pixel(Point::new(5, 10)), Some(theme::WHITE));
        assert_eq!(fb.pixel(Point::new(6, 10)), Some(theme::BLACK));
        // Last row is 10 - 15 / 2 = 3 pixels wide
        assert_eq!(fb.pixel(Point::new(6, 19)), Some(theme::BLACK));
        assert_eq!(fb.pixel(Point::new(7, 19)), Some(0));
        assert_eq!(fb.pixel(Point::new(4, 20)), Some(0));
    }

    #[test]
    fn test_cursor_clipped_at_edge() {
        let mut pixels = vec![0u32; 8 * 8];
        let mut fb = Framebuffer::new(&mut pixels, 8, 8, 8).unwrap();
        paint_cursor(&mut fb, Point::new(7, 7));
        assert_eq!(fb.pixel(Point::new(7, 7)), Some(theme::WHITE));
    }
}
