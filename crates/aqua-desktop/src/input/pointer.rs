use crate::math::{Point, Size};

/// Three-button mouse state; bit 0 left, bit 1 right, bit 2 middle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const NONE: ButtonMask = ButtonMask(0);
    pub const LEFT: ButtonMask = ButtonMask(0b001);
    pub const RIGHT: ButtonMask = ButtonMask(0b010);
    pub const MIDDLE: ButtonMask = ButtonMask(0b100);

    /// Build from raw driver bits; anything above bit 2 is dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the left button is down
    pub const fn left(self) -> bool {
        self.0 & Self::LEFT.0 != 0
    }
}

/// Pointer position and buttons as the driver last reported them
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    pub position: Point,
    pub buttons: ButtonMask,
}

impl CursorState {
    /// Create a cursor at a position with no buttons held
    pub fn new(position: Point) -> Self {
        Self {
            position,
            buttons: ButtonMask::NONE,
        }
    }

    /// Cursor resting in the middle of the screen
    pub fn centered(screen: Size) -> Self {
        Self::new(Point::new(screen.width / 2, screen.height / 2))
    }

    /// Apply one motion packet: move by a screen-space delta, clamp to
    /// `[0, w-1] x [0, h-1]`, and take the new button bits.
    pub fn apply_motion(&mut self, dx: i32, dy: i32, buttons: u8, bounds: Size) {
        let max_x = (bounds.width - 1).max(0);
        let max_y = (bounds.height - 1).max(0);
        self.position = Point::new(
            self.position.x.saturating_add(dx).clamp(0, max_x),
            self.position.y.saturating_add(dy).clamp(0, max_y),
        );
        self.buttons = ButtonMask::from_bits(buttons);
    }
}

/// Pointer driver seam; reports the current clamped position and buttons
pub trait PointerSource {
    fn poll_pointer(&mut self) -> CursorState;
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The cursor never leaves the screen
        #[test]
        fn cursor_stays_on_screen(
            moves in prop::collection::vec((-300i32..300, -300i32..300, any::<u8>()), 1..50),
        ) {
            let screen = Size::new(800, 600);
            let mut cursor = CursorState::centered(screen);
            for (dx, dy, buttons) in moves {
                cursor.apply_motion(dx, dy, buttons, screen);
                prop_assert!((0..800).contains(&cursor.position.x));
                prop_assert!((0..600).contains(&cursor.position.y));
                prop_assert!(cursor.buttons.bits() <= 0b111);
            }
        }
    }
}
