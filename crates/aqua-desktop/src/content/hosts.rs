use super::panels::{paint_terminal_backdrop, AboutPanel, FileBrowserPanel};
use super::{EditorHost, TerminalHost, WindowContent};
use crate::math::Rect;
use crate::render::Canvas;
use crate::window::WindowKind;

/// One content implementation per window kind
///
/// Terminal and editor windows share a single host each, the way one
/// interpreter and one editor serve the whole desktop.
pub struct ContentHosts {
    terminal: Box<dyn TerminalHost>,
    editor: Box<dyn EditorHost>,
    file_browser: FileBrowserPanel,
    about: AboutPanel,
}

impl ContentHosts {
    /// Wire up the external collaborators
    pub fn new(terminal: Box<dyn TerminalHost>, editor: Box<dyn EditorHost>) -> Self {
        Self {
            terminal,
            editor,
            file_browser: FileBrowserPanel,
            about: AboutPanel,
        }
    }

    pub fn terminal(&self) -> &dyn TerminalHost {
        self.terminal.as_ref()
    }

    pub fn terminal_mut(&mut self) -> &mut dyn TerminalHost {
        self.terminal.as_mut()
    }

    pub fn editor(&self) -> &dyn EditorHost {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> &mut dyn EditorHost {
        self.editor.as_mut()
    }

    /// Backdrop for a window of `kind`, painted every frame
    pub fn paint_backdrop(&self, kind: WindowKind, canvas: &mut dyn Canvas, area: Rect) {
        match kind {
            WindowKind::Terminal => {
                paint_terminal_backdrop(canvas, area);
                self.terminal.paint_backdrop(canvas, area);
            }
            WindowKind::Editor => self.editor.paint_backdrop(canvas, area),
            WindowKind::FileBrowser => self.file_browser.paint_backdrop(canvas, area),
            WindowKind::About => self.about.paint_backdrop(canvas, area),
        }
    }

    /// Dirty report for the content behind `kind`
    pub fn needs_redraw(&self, kind: WindowKind) -> bool {
        match kind {
            WindowKind::Terminal => self.terminal.needs_redraw(),
            WindowKind::Editor => self.editor.needs_redraw(),
            WindowKind::FileBrowser => self.file_browser.needs_redraw(),
            WindowKind::About => self.about.needs_redraw(),
        }
    }

    /// Live content for `kind`
    pub fn render(&mut self, kind: WindowKind, canvas: &mut dyn Canvas, area: Rect) {
        match kind {
            WindowKind::Terminal => self.terminal.render(canvas, area),
            WindowKind::Editor => self.editor.render(canvas, area),
            WindowKind::FileBrowser => self.file_browser.render(canvas, area),
            WindowKind::About => self.about.render(canvas, area),
        }
    }
}

impl std::fmt::Debug for ContentHosts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentHosts")
            .field("editor_open", &self.editor.is_open())
            .finish_non_exhaustive()
    }
}
