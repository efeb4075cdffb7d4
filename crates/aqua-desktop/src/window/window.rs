//! A single application window and its gesture state.

use super::{ResizeMode, WindowId, WindowKind, WindowMetrics, WindowRegion};
use crate::math::{Point, Rect, Size};

/// Longest title kept, in bytes; longer titles are cut at a char boundary
pub const MAX_TITLE_LEN: usize = 63;

/// Offset from the window top to the content area, below the drawn title bar
pub const CONTENT_TOP: i32 = 28;

/// What the pointer is currently doing to a window
///
/// A window is either idle, being dragged, or being resized; never two at
/// once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    /// No gesture in progress
    #[default]
    Idle,
    /// Title-bar drag
    Dragging {
        /// Press point minus the window's top-left at press time
        offset: Point,
    },
    /// Edge or corner resize
    Resizing {
        /// Which edges move
        mode: ResizeMode,
        /// Pointer position at press time
        anchor: Point,
        /// Window size at press time
        start_size: Size,
    },
}

/// One on-screen application surface
#[derive(Clone, Debug)]
pub struct Window {
    /// Handle (creation index)
    pub id: WindowId,
    /// Position and size in screen coordinates
    pub frame: Rect,
    /// Title bar text
    pub title: String,
    /// Hosted application
    pub kind: WindowKind,
    pub(crate) interaction: Interaction,
}

impl Window {
    pub(crate) fn new(id: WindowId, frame: Rect, title: &str, kind: WindowKind) -> Self {
        Self {
            id,
            frame,
            title: bounded_title(title),
            kind,
            interaction: Interaction::Idle,
        }
    }

    /// Current gesture state
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Whether a title-bar drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging { .. })
    }

    /// Whether a resize is in progress
    pub fn is_resizing(&self) -> bool {
        matches!(self.interaction, Interaction::Resizing { .. })
    }

    /// Active resize mode, `ResizeMode::None` when not resizing
    pub fn resize_mode(&self) -> ResizeMode {
        match self.interaction {
            Interaction::Resizing { mode, .. } => mode,
            _ => ResizeMode::None,
        }
    }

    /// Top-left corner
    pub fn position(&self) -> Point {
        self.frame.position()
    }

    /// Width and height
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// Area handed to the content renderer (inside the border, below the title bar)
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.frame.x.saturating_add(1),
            self.frame.y.saturating_add(CONTENT_TOP),
            self.frame.width - 2,
            self.frame.height - CONTENT_TOP - 1,
        )
    }

    /// Classify a point against this window's chrome.
    ///
    /// Resize bands win over the title bar, so the top-right corner of the
    /// title bar resizes rather than drags.
    pub fn region_at(&self, p: Point, metrics: &WindowMetrics) -> Option<WindowRegion> {
        if !self.frame.contains(p) {
            return None;
        }

        let on_right = p.x >= self.frame.right() - metrics.resize_band;
        let on_bottom = p.y >= self.frame.bottom() - metrics.resize_band;
        let mode = ResizeMode::from_edges(on_right, on_bottom);
        if mode != ResizeMode::None {
            return Some(WindowRegion::Resize(mode));
        }

        if p.y < self.frame.y.saturating_add(metrics.title_bar_height) {
            return Some(WindowRegion::TitleBar);
        }

        Some(WindowRegion::Body)
    }

    pub(crate) fn start_drag(&mut self, press: Point) {
        self.interaction = Interaction::Dragging {
            offset: press - self.position(),
        };
    }

    pub(crate) fn start_resize(&mut self, mode: ResizeMode, press: Point) {
        self.interaction = Interaction::Resizing {
            mode,
            anchor: press,
            start_size: self.size(),
        };
    }

    pub(crate) fn end_gesture(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Apply pointer motion to whatever gesture is in progress
    pub(crate) fn track_pointer(&mut self, p: Point, min: Size) {
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging { offset } => {
                let pos = p - offset;
                self.frame.x = pos.x;
                self.frame.y = pos.y;
            }
            Interaction::Resizing {
                mode,
                anchor,
                start_size,
            } => {
                let delta = p - anchor;
                if mode.adjusts_width() {
                    self.frame.width = start_size.width.saturating_add(delta.x).max(min.width);
                }
                if mode.adjusts_height() {
                    self.frame.height = start_size.height.saturating_add(delta.y).max(min.height);
                }
            }
        }
    }
}

fn bounded_title(title: &str) -> String {
    if title.len() <= MAX_TITLE_LEN {
        return title.to_string();
    }
    let mut end = MAX_TITLE_LEN;
    while !title.is_char_boundary(end) {
        end -= 1;
    }
    title[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> WindowMetrics {
        WindowMetrics {
            title_bar_height: 30,
            resize_band: 8,
            min_size: Size::new(200, 150),
        }
    }

    #[test]
    fn test_region_at() {
        let win = Window::new(0, Rect::new(100, 100, 300, 200), "w", WindowKind::About);
        let m = metrics();

        assert_eq!(win.region_at(Point::new(99, 150), &m), None);
        assert_eq!(win.region_at(Point::new(400, 150), &m), None);
        assert_eq!(
            win.region_at(Point::new(150, 110), &m),
            Some(WindowRegion::TitleBar)
        );
        assert_eq!(
            win.region_at(Point::new(150, 200), &m),
            Some(WindowRegion::Body)
        );
        assert_eq!(
            win.region_at(Point::new(395, 200), &m),
            Some(WindowRegion::Resize(ResizeMode::Right))
        );
        assert_eq!(
            win.region_at(Point::new(150, 295), &m),
            Some(WindowRegion::Resize(ResizeMode::Bottom))
        );
        assert_eq!(
            win.region_at(Point::new(399, 299), &m),
            Some(WindowRegion::Resize(ResizeMode::BottomRight))
        );
    }

    #[test]
    fn test_resize_band_beats_title_bar() {
        let win = Window::new(0, Rect::new(0, 0, 300, 200), "w", WindowKind::About);
        assert_eq!(
            win.region_at(Point::new(296, 5), &metrics()),
            Some(WindowRegion::Resize(ResizeMode::Right))
        );
    }

    #[test]
    fn test_title_is_bounded() {
        let long = "x".repeat(100);
        let win = Window::new(0, Rect::new(0, 0, 300, 200), &long, WindowKind::About);
        assert_eq!(win.title.len(), MAX_TITLE_LEN);

        // Multi-byte chars are never split
        let wide = "é".repeat(40);
        let win = Window::new(0, Rect::new(0, 0, 300, 200), &wide, WindowKind::About);
        assert!(win.title.len() <= MAX_TITLE_LEN);
        assert!(win.title.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_content_rect() {
        let win = Window::new(0, Rect::new(10, 20, 300, 200), "w", WindowKind::Terminal);
        assert_eq!(win.content_rect(), Rect::new(11, 48, 298, 171));
    }

    #[test]
    fn test_drag_tracks_offset() {
        let mut win = Window::new(0, Rect::new(100, 100, 300, 200), "w", WindowKind::About);
        win.start_drag(Point::new(120, 110));
        win.track_pointer(Point::new(220, 160), metrics().min_size);
        assert_eq!(win.position(), Point::new(200, 150));
        assert_eq!(win.size(), Size::new(300, 200));
    }

    #[test]
    fn test_resize_right_only_changes_width() {
        let mut win = Window::new(0, Rect::new(0, 0, 300, 200), "w", WindowKind::About);
        win.start_resize(ResizeMode::Right, Point::new(296, 100));
        win.track_pointer(Point::new(346, 400), metrics().min_size);
        assert_eq!(win.size(), Size::new(350, 200));
    }

    #[test]
    fn test_idle_ignores_motion() {
        let mut win = Window::new(0, Rect::new(0, 0, 300, 200), "w", WindowKind::About);
        win.track_pointer(Point::new(500, 500), metrics().min_size);
        assert_eq!(win.frame, Rect::new(0, 0, 300, 200));
    }
}
