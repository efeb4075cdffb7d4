//! Desktop Shell for AquaOS
//!
//! This crate provides the windowing and input engine of a single-threaded
//! framebuffer desktop:
//! - Window management (create, focus, z-order, drag and resize)
//! - A dock of launcher icons with proximity magnification
//! - Input routing between the login screen, editor and terminal
//! - Per-frame redraw scheduling
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Integer geometry (`Point`, `Rect`, `Size`)
//! - [`window`]: Window lifecycle and the gesture state machine
//! - [`dock`]: Launcher icons, magnification and click-to-launch
//! - [`input`]: Driver seams and the input router
//! - [`render`]: The `Canvas` seam, framebuffer, painters and scheduler
//! - [`content`]: Per-kind window content and collaborator hosts
//! - [`overlay`]: The login screen
//! - [`config`]: Serde-backed configuration
//!
//! ## Example
//!
//! ```rust
//! use aqua_desktop::{DesktopConfig, Rect, WindowKind, WindowManager};
//!
//! let config = DesktopConfig::default();
//! let mut windows = WindowManager::from_config(&config.windows);
//!
//! let id = windows
//!     .create_window(Rect::new(0, 0, 300, 200), "Terminal", WindowKind::Terminal)
//!     .unwrap();
//! assert_eq!(windows.active_id(), Some(id));
//! ```
//!
//! ## Design Principles
//!
//! 1. **One owner**: all mutable state lives in [`DesktopSession`]
//! 2. **Fixed capacity**: windows and dock slots are bounded arenas indexed by stable handles
//! 3. **Injectable drivers**: keyboard, pointer, clock and pixels all come in through traits

pub mod clock;
pub mod config;
pub mod content;
pub mod dock;
pub mod input;
pub mod math;
pub mod overlay;
pub mod render;
pub mod window;

mod error;
mod session;
mod types;

// Re-export core types for convenience
pub use clock::{ClockSource, FixedClock, TimeOfDay};
pub use config::{DesktopConfig, DockConfig, FrameConfig, LaunchConfig, ScreenConfig, WindowsConfig};
pub use content::{ContentHosts, EditorHost, LaunchRequest, TerminalHost, WindowContent};
pub use dock::{Dock, DockIcon, DOCK_SLOTS};
pub use error::{DesktopError, DesktopResult};
pub use input::{ButtonMask, CursorState, InputRouter, KeySource, KeySymbol, PointerSource};
pub use math::{Point, Rect, Size};
pub use overlay::{LoginOverlay, Overlay};
pub use render::{Canvas, Framebuffer, RenderScheduler};
pub use session::{DesktopSession, FramePacer, Phase};
pub use types::Color;
pub use window::{LaunchSpec, Window, WindowId, WindowKind, WindowManager};

pub use aqua_identity::CredentialStore;
