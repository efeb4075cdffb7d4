//! Input module
//!
//! Driver-facing seams for the keyboard and pointer, and the router that
//! decides which component each event reaches.

mod key;
mod pointer;
mod router;

pub use key::{KeySource, KeySymbol};
pub use pointer::{ButtonMask, CursorState, PointerSource};
pub use router::{FocusContext, InputRouter, KeyTarget, PointerResult, PointerTransition};
