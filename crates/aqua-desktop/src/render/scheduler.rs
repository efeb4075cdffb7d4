//! Per-frame redraw decisions.
//!
//! The dock, every window's chrome and the pointer are repainted on every
//! frame. Only the background, the top bar and window content are gated,
//! and [`FramePlan`] carries those decisions.

use tracing::trace;

/// Which gated surfaces to repaint this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FramePlan {
    /// Repaint the desktop gradient
    pub background: bool,
    /// Repaint the top bar
    pub top_bar: bool,
    /// Read a fresh time from the clock before painting the top bar
    pub refresh_clock: bool,
    /// Repaint the active window's content
    pub active_content: bool,
}

/// Tracks the full-redraw signal and the clock refresh interval
#[derive(Clone, Debug)]
pub struct RenderScheduler {
    needs_full_redraw: bool,
    clock_interval: u32,
    frames_since_clock: u32,
}

impl RenderScheduler {
    /// Create a scheduler whose first frame repaints everything
    pub fn new(clock_interval: u32) -> Self {
        Self {
            needs_full_redraw: true,
            clock_interval: clock_interval.max(1),
            frames_since_clock: clock_interval.max(1),
        }
    }

    /// Ask for the background and top bar on the next frame
    pub fn request_full_redraw(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Whether the next frame repaints the background
    pub fn needs_full_redraw(&self) -> bool {
        self.needs_full_redraw
    }

    /// Decide the gated work for one frame and consume the signals that
    /// produced it. `content_dirty` is the active window's own report.
    pub fn plan_frame(&mut self, content_dirty: bool) -> FramePlan {
        let refresh_clock = self.frames_since_clock >= self.clock_interval;
        if refresh_clock {
            self.frames_since_clock = 0;
        }
        self.frames_since_clock += 1;

        let background = std::mem::take(&mut self.needs_full_redraw);
        let plan = FramePlan {
            background,
            top_bar: background || refresh_clock,
            refresh_clock,
            active_content: content_dirty,
        };
        if background {
            trace!("full redraw");
        }
        plan
    }
}
