use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered, zero for degenerate sizes
    pub fn area(self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }
}
