/// Which edges a resize gesture moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    /// Not resizing
    #[default]
    None,
    /// Right edge: width only
    Right,
    /// Bottom edge: height only
    Bottom,
    /// Bottom-right corner: both
    BottomRight,
}

impl ResizeMode {
    /// Classify a press by which resize bands it falls in
    pub fn from_edges(on_right: bool, on_bottom: bool) -> Self {
        match (on_right, on_bottom) {
            (true, true) => ResizeMode::BottomRight,
            (true, false) => ResizeMode::Right,
            (false, true) => ResizeMode::Bottom,
            (false, false) => ResizeMode::None,
        }
    }

    /// Whether this mode changes the width
    pub fn adjusts_width(&self) -> bool {
        matches!(self, ResizeMode::Right | ResizeMode::BottomRight)
    }

    /// Whether this mode changes the height
    pub fn adjusts_height(&self) -> bool {
        matches!(self, ResizeMode::Bottom | ResizeMode::BottomRight)
    }
}

/// Part of a window under a point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Resize band along the right and/or bottom edge
    Resize(ResizeMode),
    /// Title bar (drag handle)
    TitleBar,
    /// Anywhere else inside the window
    Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges() {
        assert_eq!(ResizeMode::from_edges(true, true), ResizeMode::BottomRight);
        assert_eq!(ResizeMode::from_edges(true, false), ResizeMode::Right);
        assert_eq!(ResizeMode::from_edges(false, true), ResizeMode::Bottom);
        assert_eq!(ResizeMode::from_edges(false, false), ResizeMode::None);
    }

    #[test]
    fn test_adjusted_axes() {
        assert!(ResizeMode::Right.adjusts_width());
        assert!(!ResizeMode::Right.adjusts_height());
        assert!(ResizeMode::Bottom.adjusts_height());
        assert!(!ResizeMode::Bottom.adjusts_width());
        assert!(ResizeMode::BottomRight.adjusts_width());
        assert!(ResizeMode::BottomRight.adjusts_height());
        assert!(!ResizeMode::None.adjusts_width());
    }
}
