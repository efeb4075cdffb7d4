//! Window table, focus and gesture dispatch.

use tracing::{debug, warn};

use super::{LaunchSpec, Window, WindowId, WindowKind, WindowRegion};
use crate::config::WindowsConfig;
use crate::content::ContentHosts;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Point, Rect, Size};
use crate::render::{chrome, Canvas};

/// Chrome geometry used for hit testing and resize clamping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowMetrics {
    /// Height of the draggable band at the top of each window
    pub title_bar_height: i32,
    /// Width of the resize band along the right and bottom edges
    pub resize_band: i32,
    /// Floor for width and height
    pub min_size: Size,
}

impl From<&WindowsConfig> for WindowMetrics {
    fn from(config: &WindowsConfig) -> Self {
        Self {
            title_bar_height: config.title_bar_height,
            resize_band: config.resize_band,
            min_size: Size::new(config.min_width, config.min_height),
        }
    }
}

/// Owns every window, in creation order
///
/// Position in the table is z-order: later windows sit on top and are
/// hit-tested first. Windows are never reordered or removed, so a
/// [`WindowId`] stays valid for the whole session.
///
/// Only one gesture (drag or resize) exists at a time. A press cancels any
/// gesture still in flight before starting its own, and a release ends
/// every gesture on every window.
#[derive(Debug)]
pub struct WindowManager {
    windows: Vec<Window>,
    capacity: usize,
    active: Option<WindowId>,
    metrics: WindowMetrics,
}

impl WindowManager {
    /// Create an empty manager with the given capacity and chrome metrics
    pub fn new(capacity: usize, metrics: WindowMetrics) -> Self {
        Self {
            windows: Vec::with_capacity(capacity),
            capacity,
            active: None,
            metrics,
        }
    }

    /// Create a manager from configuration
    pub fn from_config(config: &WindowsConfig) -> Self {
        Self::new(config.capacity, WindowMetrics::from(config))
    }

    /// Open a window and make it active.
    ///
    /// Sizes below the configured floor are raised to it. Fails with
    /// [`DesktopError::WindowTableFull`] when the table is at capacity,
    /// leaving the table untouched.
    pub fn create_window(
        &mut self,
        frame: Rect,
        title: &str,
        kind: WindowKind,
    ) -> DesktopResult<WindowId> {
        if self.windows.len() >= self.capacity {
            warn!(capacity = self.capacity, title, "window table full, launch ignored");
            return Err(DesktopError::WindowTableFull {
                capacity: self.capacity,
            });
        }

        let frame = Rect::new(
            frame.x,
            frame.y,
            frame.width.max(self.metrics.min_size.width),
            frame.height.max(self.metrics.min_size.height),
        );

        let id = self.windows.len();
        self.windows.push(Window::new(id, frame, title, kind));
        self.active = Some(id);
        debug!(id, ?kind, title, "window created");
        Ok(id)
    }

    /// Open a window from a launch spec
    pub fn launch(&mut self, spec: &LaunchSpec) -> DesktopResult<WindowId> {
        self.create_window(spec.frame, &spec.title, spec.kind)
    }

    /// Start a gesture on the topmost window under the pointer.
    ///
    /// A press in a resize band starts a resize, a press in the title bar
    /// starts a drag, and either makes that window active. The topmost
    /// window containing the point takes the press even when it lands in
    /// its body, in which case nothing happens.
    pub fn handle_pointer_press(&mut self, p: Point) {
        self.cancel_gestures();

        let metrics = self.metrics;
        let Some(window) = self.window_at(p).and_then(|id| self.windows.get_mut(id)) else {
            return;
        };

        match window.region_at(p, &metrics) {
            Some(WindowRegion::Resize(mode)) => {
                window.start_resize(mode, p);
                debug!(id = window.id, ?mode, "resize started");
                self.active = Some(window.id);
            }
            Some(WindowRegion::TitleBar) => {
                window.start_drag(p);
                debug!(id = window.id, "drag started");
                self.active = Some(window.id);
            }
            Some(WindowRegion::Body) | None => {}
        }
    }

    /// End every gesture on every window
    pub fn handle_pointer_release(&mut self) {
        if self.is_interacting() {
            debug!("gesture ended");
        }
        self.cancel_gestures();
    }

    /// Move or resize whichever window has a gesture in progress
    pub fn handle_pointer_move(&mut self, p: Point) {
        let min = self.metrics.min_size;
        for window in &mut self.windows {
            window.track_pointer(p, min);
        }
    }

    /// Whether any window is being dragged or resized
    pub fn is_interacting(&self) -> bool {
        self.windows
            .iter()
            .any(|w| w.is_dragging() || w.is_resizing())
    }

    /// Draw every window's chrome and content backdrop, oldest first
    pub fn render_all(&self, canvas: &mut dyn Canvas, hosts: &ContentHosts) {
        for window in &self.windows {
            chrome::paint_window(canvas, window, self.active == Some(window.id));
            hosts.paint_backdrop(window.kind, canvas, window.content_rect());
        }
    }

    /// The window holding keyboard focus
    pub fn active_window(&self) -> Option<&Window> {
        self.active.and_then(|id| self.windows.get(id))
    }

    /// Handle of the active window
    pub fn active_id(&self) -> Option<WindowId> {
        self.active
    }

    /// Topmost window containing a point
    pub fn window_at(&self, p: Point) -> Option<WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.frame.contains(p))
            .map(|w| w.id)
    }

    /// Look up a window
    pub fn get(&self, id: WindowId) -> DesktopResult<&Window> {
        self.windows.get(id).ok_or(DesktopError::WindowNotFound(id))
    }

    /// All windows, bottom to top
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Number of open windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no windows are open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Whether further launches will be rejected
    pub fn is_full(&self) -> bool {
        self.windows.len() >= self.capacity
    }

    /// Fixed capacity of the table
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Chrome metrics in use
    pub fn metrics(&self) -> &WindowMetrics {
        &self.metrics
    }

    fn cancel_gestures(&mut self) {
        for window in &mut self.windows {
            window.end_gesture();
        }
    }
}
