use crate::input::KeySymbol;
use crate::math::Rect;
use crate::render::Canvas;
use crate::window::LaunchSpec;

/// Paints the inside of one kind of window
///
/// `paint_backdrop` runs every frame right after the window chrome.
/// `render` runs only for the active window, and only on frames where
/// `needs_redraw` reported true.
///
/// The chrome clears the content area on every frame, so whatever `render`
/// paints is visible for that frame only. A host whose content should stay
/// on screen must report `needs_redraw` on every frame it wants it shown,
/// or paint it from `paint_backdrop`.
pub trait WindowContent {
    /// Static backdrop, repainted with the chrome
    fn paint_backdrop(&self, _canvas: &mut dyn Canvas, _area: Rect) {}

    /// Whether `render` should paint this frame
    fn needs_redraw(&self) -> bool {
        false
    }

    /// Paint live content for this frame
    fn render(&mut self, _canvas: &mut dyn Canvas, _area: Rect) {}
}

/// Something the command interpreter wants opened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchRequest {
    /// A plain window
    Window(LaunchSpec),
    /// The text editor, optionally on a named file
    Editor { file: Option<String> },
}

/// Command interpreter hosted in terminal windows
///
/// A console that keeps its scrollback visible reports `needs_redraw` on
/// every frame while its window is active.
pub trait TerminalHost: WindowContent {
    /// Feed one key typed while no editor is open
    fn handle_key(&mut self, key: KeySymbol);

    /// Pending launch request, if a command asked for one
    fn take_launch_request(&mut self) -> Option<LaunchRequest>;
}

/// Modal text editor hosted in editor windows
pub trait EditorHost: WindowContent {
    /// Whether a buffer is open; an open editor takes the keyboard
    fn is_open(&self) -> bool;

    /// Open a buffer, loading `file` when given
    fn open(&mut self, file: Option<&str>);

    /// Feed one key
    fn handle_key(&mut self, key: KeySymbol);
}
