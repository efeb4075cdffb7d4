//! Window content module
//!
//! Per-kind painting for window interiors, and the seams through which the
//! command interpreter and the text editor plug into the desktop.

mod host;
mod hosts;
mod panels;

pub use host::{EditorHost, LaunchRequest, TerminalHost, WindowContent};
pub use hosts::ContentHosts;
pub use panels::{paint_terminal_backdrop, AboutPanel, FileBrowserPanel};
