use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// Axis-aligned rectangle, right and bottom edges exclusive
///
/// Edge and translation arithmetic saturates at the `i32` range, so a frame
/// parked near the limits clips instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Top-left corner
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point (rounded toward the top-left)
    pub fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Grow by `amount` on every side (negative shrinks)
    pub fn expand(&self, amount: i32) -> Rect {
        let grow = amount.saturating_mul(2);
        Rect::new(
            self.x.saturating_sub(amount),
            self.y.saturating_sub(amount),
            self.width.saturating_add(grow),
            self.height.saturating_add(grow),
        )
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: i32) -> Rect {
        self.expand(-amount)
    }

    /// Translate by an offset
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Overlapping region, `None` when disjoint
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)))
    }

    /// True when the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_excludes_far_edges() {
        let rect = Rect::new(10, 20, 100, 50);

        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(109, 69)));
        assert!(!rect.contains(Point::new(110, 40)));
        assert!(!rect.contains(Point::new(50, 70)));
        assert!(!rect.contains(Point::new(9, 40)));
    }

    #[test]
    fn test_rect_edges_saturate() {
        let far = Rect::new(i32::MAX - 100, i32::MIN + 10, 300, 200);
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.bottom(), i32::MIN + 210);
        assert_eq!(far.expand(4).x, i32::MAX - 104);
        assert_eq!(far.offset(200, 0).x, i32::MAX);
        assert_eq!(far.intersection(&Rect::new(0, 0, 800, 600)), None);

        let huge = Rect::new(i32::MIN, 0, i32::MAX, 10);
        let clip = huge.intersection(&Rect::new(-10, 0, 20, 10));
        assert_eq!(clip, Some(Rect::new(-10, 0, 9, 10)));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 60, 100, 100);
        assert_eq!(a.intersection(&b), Some(Rect::new(50, 60, 50, 40)));
        assert_eq!(a.intersection(&Rect::new(100, 0, 10, 10)), None);
    }

    #[test]
    fn test_rect_expand_and_inset() {
        let r = Rect::new(10, 10, 20, 20);
        assert_eq!(r.expand(4), Rect::new(6, 6, 28, 28));
        assert_eq!(r.inset(2), Rect::new(12, 12, 16, 16));
        assert!(r.inset(10).is_empty());
    }
}
