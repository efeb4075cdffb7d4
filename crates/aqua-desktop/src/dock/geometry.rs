use crate::config::DockConfig;
use crate::math::{Point, Rect, Size};

/// Resolved dock layout for one screen size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DockGeometry {
    /// Dock background, centered along the bottom of the screen
    pub frame: Rect,
    pub base_icon_size: i32,
    pub max_icon_size: i32,
    pub icon_gap: i32,
    pub padding_left: i32,
    pub icon_top: i32,
    pub proximity_band: i32,
    pub magnify_radius: i32,
    pub decay_step: i32,
}

impl DockGeometry {
    /// Lay the dock out on a screen
    pub fn new(config: &DockConfig, screen: Size) -> Self {
        let frame = Rect::new(
            (screen.width - config.width) / 2,
            screen.height - config.height - config.bottom_margin,
            config.width,
            config.height,
        );
        Self {
            frame,
            base_icon_size: config.base_icon_size,
            max_icon_size: config.max_icon_size,
            icon_gap: config.icon_gap,
            padding_left: config.padding_left,
            icon_top: config.icon_top,
            proximity_band: config.proximity_band,
            magnify_radius: config.magnify_radius,
            decay_step: config.decay_step,
        }
    }

    /// Resting top-left of slot `index`
    pub fn slot_origin(&self, index: usize) -> Point {
        let step = self.base_icon_size + self.icon_gap;
        Point::new(
            self.frame.x + self.padding_left + index as i32 * step,
            self.frame.y + self.icon_top,
        )
    }

    /// Center of slot `index` at rest
    pub fn slot_center(&self, index: usize) -> Point {
        let half = self.base_icon_size / 2;
        self.slot_origin(index) + Point::new(half, half)
    }

    /// Drawn and clickable area of an icon: centered horizontally on its
    /// slot, bottom edge pinned so it grows upward.
    pub fn icon_rect(&self, origin: Point, size: i32) -> Rect {
        let grow = size - self.base_icon_size;
        Rect::new(origin.x - grow / 2, origin.y - grow, size, size)
    }

    /// Whether the pointer is low enough on screen to magnify icons
    pub fn in_proximity(&self, p: Point) -> bool {
        p.y >= self.frame.y - self.proximity_band && p.y <= self.frame.bottom()
    }

    /// Magnified size for an icon whose center is `distance` away, or
    /// `None` beyond the radius
    pub fn magnified_size(&self, distance: i32) -> Option<i32> {
        if distance >= self.magnify_radius {
            return None;
        }
        let span = self.max_icon_size - self.base_icon_size;
        let boost = (self.magnify_radius - distance).saturating_mul(span) / self.magnify_radius;
        Some(self.base_icon_size + boost)
    }

    /// Where the running indicator for slot `index` sits
    pub fn running_dot(&self, index: usize) -> Rect {
        let origin = self.slot_origin(index);
        Rect::new(
            origin.x + self.base_icon_size / 2 - 2,
            self.frame.bottom() - 8,
            4,
            4,
        )
    }
}
