//! Launcher strip with proximity magnification.

use tracing::{debug, warn};

use super::{DockGeometry, DockIcon, DOCK_SLOTS};
use crate::config::DockConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Point, Rect, Size};
use crate::render::{theme, Canvas};
use crate::window::{WindowId, WindowManager};

/// Fixed row of launcher icons along the bottom of the screen
///
/// Icon sizes are animated once per frame by [`Dock::update_magnification`]
/// and always stay within `[base_icon_size, max_icon_size]`.
#[derive(Clone, Debug)]
pub struct Dock {
    geometry: DockGeometry,
    icons: [DockIcon; DOCK_SLOTS],
}

impl Dock {
    /// Build the dock for a screen size; every icon starts at rest
    pub fn new(config: &DockConfig, screen: Size) -> Self {
        let geometry = DockGeometry::new(config, screen);
        let icons = std::array::from_fn(|i| {
            DockIcon::new(
                &config.icons[i],
                geometry.slot_origin(i),
                geometry.base_icon_size,
            )
        });
        Self { geometry, icons }
    }

    /// Animate icon sizes toward the pointer.
    ///
    /// Inside the proximity band an icon within the magnify radius jumps
    /// straight to its magnified size; every other icon shrinks by the decay
    /// step.
    pub fn update_magnification(&mut self, p: Point) {
        let g = self.geometry;
        let near = g.in_proximity(p);

        for (i, icon) in self.icons.iter_mut().enumerate() {
            icon.base = g.slot_origin(i);

            let target = if near {
                g.magnified_size(p.distance(g.slot_center(i)))
            } else {
                None
            };

            icon.size = match target {
                Some(size) => size,
                None if icon.size > g.base_icon_size => icon.size - g.decay_step,
                None => icon.size,
            };
            icon.size = icon.size.clamp(g.base_icon_size, g.max_icon_size);
        }
    }

    /// Paint the background, top border, icons and running dots
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let g = &self.geometry;
        canvas.fill_rect(g.frame, theme::DOCK_BACKGROUND);
        canvas.fill_rect(
            Rect::new(g.frame.x, g.frame.y, g.frame.width, 1),
            theme::DOCK_BORDER,
        );

        for (i, icon) in self.icons.iter().enumerate() {
            let rect = g.icon_rect(icon.base, icon.size);
            canvas.fill_rect(rect.offset(2, 2), theme::DOCK_ICON_SHADOW);
            canvas.fill_rect(rect, icon.color);
            if icon.running {
                canvas.fill_rect(g.running_dot(i), theme::DOCK_RUNNING_DOT);
            }
        }
    }

    /// Launch the icon under the pointer, if any.
    ///
    /// Hit testing uses the same animated rectangle that [`Dock::render`]
    /// draws. The icon's running dot lights only when the window was
    /// actually created; a full window table leaves it untouched.
    pub fn handle_click(&mut self, p: Point, windows: &mut WindowManager) -> Option<WindowId> {
        let g = self.geometry;
        let slot = (0..DOCK_SLOTS)
            .rev()
            .find(|&i| g.icon_rect(self.icons[i].base, self.icons[i].size).contains(p))?;

        let icon = &mut self.icons[slot];
        match windows.launch(&icon.launch) {
            Ok(id) => {
                icon.running = true;
                debug!(slot, label = %icon.label, id, "dock launch");
                Some(id)
            }
            Err(e) => {
                warn!(slot, label = %icon.label, error = %e, "dock launch failed");
                None
            }
        }
    }

    /// Light or clear a slot's running indicator
    pub fn set_running(&mut self, index: usize, running: bool) -> DesktopResult<()> {
        let icon = self
            .icons
            .get_mut(index)
            .ok_or(DesktopError::DockSlotOutOfBounds {
                index,
                count: DOCK_SLOTS,
            })?;
        icon.running = running;
        Ok(())
    }

    /// Current drawn and clickable area of a slot
    pub fn icon_rect(&self, index: usize) -> Option<Rect> {
        self.icons
            .get(index)
            .map(|icon| self.geometry.icon_rect(icon.base, icon.size))
    }

    /// All slots, left to right
    pub fn icons(&self) -> &[DockIcon; DOCK_SLOTS] {
        &self.icons
    }

    /// Resolved layout
    pub fn geometry(&self) -> &DockGeometry {
        &self.geometry
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = Point> {
        (-100i32..900, -100i32..700).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        /// Sizes stay in [base, max] whatever the pointer does
        #[test]
        fn sizes_stay_in_range(path in prop::collection::vec(point(), 1..100)) {
            let mut dock = Dock::new(&DockConfig::default(), Size::new(800, 600));
            for p in path {
                dock.update_magnification(p);
                for icon in dock.icons() {
                    prop_assert!((48..=72).contains(&icon.size()));
                }
            }
        }

        /// Once the pointer leaves the band, every icon is back at base
        /// within ceil((max - base) / step) frames
        #[test]
        fn decay_converges(
            path in prop::collection::vec(point(), 1..50),
            step in 1i32..10,
        ) {
            let config = DockConfig { decay_step: step, ..DockConfig::default() };
            let mut dock = Dock::new(&config, Size::new(800, 600));
            for p in path {
                dock.update_magnification(p);
            }

            let frames = (72 - 48 + step - 1) / step;
            for _ in 0..frames {
                dock.update_magnification(Point::new(400, 0));
            }
            for icon in dock.icons() {
                prop_assert_eq!(icon.size(), 48);
            }
        }
    }
}
