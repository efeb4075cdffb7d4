//! Built-in content for windows that host no external program.

use super::WindowContent;
use crate::math::{Point, Rect};
use crate::render::{theme, Canvas};

/// Black console area inside a terminal window, one pixel in from the
/// content edge
pub fn paint_terminal_backdrop(canvas: &mut dyn Canvas, area: Rect) {
    canvas.fill_rect(area.inset(1), theme::BLACK);
}

fn paint_card(canvas: &mut dyn Canvas, area: Rect) {
    canvas.fill_rect(area.inset(8), theme::WHITE);
}

/// File browser placeholder card
#[derive(Clone, Copy, Debug, Default)]
pub struct FileBrowserPanel;

impl WindowContent for FileBrowserPanel {
    fn paint_backdrop(&self, canvas: &mut dyn Canvas, area: Rect) {
        paint_card(canvas, area);
        canvas.draw_text(area.position() + Point::new(16, 16), "Files:", theme::TEXT_PRIMARY);
    }
}

/// Product name and version card
#[derive(Clone, Copy, Debug, Default)]
pub struct AboutPanel;

impl AboutPanel {
    pub const HEADLINE: &'static str = concat!("AquaOS v", env!("CARGO_PKG_VERSION"));
    pub const TAGLINE: &'static str = "Framebuffer desktop shell";
}

impl WindowContent for AboutPanel {
    fn paint_backdrop(&self, canvas: &mut dyn Canvas, area: Rect) {
        paint_card(canvas, area);
        let origin = area.position();
        canvas.draw_text(origin + Point::new(16, 16), Self::HEADLINE, theme::TEXT_PRIMARY);
        canvas.draw_text(origin + Point::new(16, 32), Self::TAGLINE, theme::TEXT_SECONDARY);
    }
}
