//! Per-frame input dispatch policy.

use tracing::trace;

use super::{ButtonMask, CursorState};
use crate::dock::Dock;
use crate::window::{WindowId, WindowManager};

/// Left-button edge seen between two polls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTransition {
    Pressed,
    Released,
}

/// Who receives this frame's keyboard symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyTarget {
    /// The authentication overlay
    Overlay,
    /// The open text editor
    Editor,
    /// The command interpreter
    Terminal,
}

/// Focus facts derived fresh every frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusContext {
    /// The login overlay is showing
    pub overlay_active: bool,
    /// The editor has a buffer open
    pub editor_open: bool,
}

impl FocusContext {
    /// Strict priority: overlay, then editor, then terminal
    pub fn key_target(&self) -> KeyTarget {
        if self.overlay_active {
            KeyTarget::Overlay
        } else if self.editor_open {
            KeyTarget::Editor
        } else {
            KeyTarget::Terminal
        }
    }
}

/// What a frame's pointer dispatch changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerResult {
    /// Left-button edge, if any
    pub transition: Option<PointerTransition>,
    /// Window opened by a dock click
    pub launched: Option<WindowId>,
}

/// Turns raw pointer polls into button edges and routes them
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    prev_buttons: ButtonMask,
}

impl InputRouter {
    /// Create a router with no buttons held
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against the previous poll and report a left-button edge
    pub fn pointer_transition(&mut self, buttons: ButtonMask) -> Option<PointerTransition> {
        let was_down = self.prev_buttons.left();
        self.prev_buttons = buttons;
        match (was_down, buttons.left()) {
            (false, true) => Some(PointerTransition::Pressed),
            (true, false) => Some(PointerTransition::Released),
            _ => None,
        }
    }

    /// Deliver one pointer poll to the desktop.
    ///
    /// A press goes to the window manager and then the dock; a release ends
    /// all gestures. While the left button is held and a gesture is in
    /// progress, motion feeds the window manager. The dock's magnification
    /// follows the pointer every frame.
    pub fn dispatch_pointer(
        &mut self,
        cursor: &CursorState,
        windows: &mut WindowManager,
        dock: &mut Dock,
    ) -> PointerResult {
        let p = cursor.position;
        let transition = self.pointer_transition(cursor.buttons);
        let mut launched = None;

        match transition {
            Some(PointerTransition::Pressed) => {
                trace!(x = p.x, y = p.y, "press");
                windows.handle_pointer_press(p);
                launched = dock.handle_click(p, windows);
            }
            Some(PointerTransition::Released) => windows.handle_pointer_release(),
            None => {}
        }

        if cursor.buttons.left() && windows.is_interacting() {
            windows.handle_pointer_move(p);
        }

        dock.update_magnification(p);

        PointerResult {
            transition,
            launched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesktopConfig;
    use crate::math::{Point, Rect};
    use crate::window::WindowKind;

    fn cursor(x: i32, y: i32, buttons: u8) -> CursorState {
        CursorState {
            position: Point::new(x, y),
            buttons: ButtonMask::from_bits(buttons),
        }
    }

    fn desktop() -> (WindowManager, Dock) {
        let config = DesktopConfig::default();
        (
            WindowManager::from_config(&config.windows),
            Dock::new(&config.dock, config.screen.size()),
        )
    }

    #[test]
    fn test_key_priority() {
        let ctx = FocusContext {
            overlay_active: true,
            editor_open: true,
        };
        assert_eq!(ctx.key_target(), KeyTarget::Overlay);

        let ctx = FocusContext {
            overlay_active: false,
            editor_open: true,
        };
        assert_eq!(ctx.key_target(), KeyTarget::Editor);

        assert_eq!(FocusContext::default().key_target(), KeyTarget::Terminal);
    }

    #[test]
    fn test_edges_only_on_left_changes() {
        let mut router = InputRouter::new();
        assert_eq!(router.pointer_transition(ButtonMask::NONE), None);
        assert_eq!(
            router.pointer_transition(ButtonMask::LEFT),
            Some(PointerTransition::Pressed)
        );
        assert_eq!(router.pointer_transition(ButtonMask::LEFT), None);
        // Right button alone does not count
        assert_eq!(
            router.pointer_transition(ButtonMask::RIGHT),
            Some(PointerTransition::Released)
        );
        assert_eq!(router.pointer_transition(ButtonMask::RIGHT), None);
    }

    #[test]
    fn test_drag_through_router() {
        let (mut wm, mut dock) = desktop();
        let id = wm
            .create_window(Rect::new(100, 100, 300, 200), "A", WindowKind::About)
            .unwrap();
        let mut router = InputRouter::new();

        let result = router.dispatch_pointer(&cursor(150, 110, 1), &mut wm, &mut dock);
        assert_eq!(result.transition, Some(PointerTransition::Pressed));
        assert!(wm.get(id).unwrap().is_dragging());

        router.dispatch_pointer(&cursor(250, 210, 1), &mut wm, &mut dock);
        assert_eq!(wm.get(id).unwrap().position(), Point::new(200, 200));

        let result = router.dispatch_pointer(&cursor(300, 300, 0), &mut wm, &mut dock);
        assert_eq!(result.transition, Some(PointerTransition::Released));
        assert!(!wm.is_interacting());
        assert_eq!(wm.get(id).unwrap().position(), Point::new(200, 200));
    }

    #[test]
    fn test_dock_click_through_router() {
        let (mut wm, mut dock) = desktop();
        let mut router = InputRouter::new();
        let center = dock.icon_rect(2).unwrap().center();

        let result = router.dispatch_pointer(&cursor(center.x, center.y, 1), &mut wm, &mut dock);
        assert_eq!(result.launched, Some(0));
        assert_eq!(wm.get(0).unwrap().kind, WindowKind::Terminal);
        assert!(dock.icons()[2].is_running());
        // Held button does not launch again
        let result = router.dispatch_pointer(&cursor(center.x, center.y, 1), &mut wm, &mut dock);
        assert_eq!(result.launched, None);
        assert_eq!(wm.len(), 1);
    }

    #[test]
    fn test_hover_magnifies_without_buttons() {
        let (mut wm, mut dock) = desktop();
        let mut router = InputRouter::new();
        let base = dock.geometry().base_icon_size;
        let center = dock.icon_rect(0).unwrap().center();

        router.dispatch_pointer(&cursor(center.x, center.y, 0), &mut wm, &mut dock);
        assert!(dock.icons()[0].size() > base);
        assert_eq!(wm.len(), 0);
    }
}
