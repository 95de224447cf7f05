#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are signed pixels with the origin at the top-left corner.

use std::ops::{Add, Sub};

/// A 2D integer point, also used for paired `(x, y)` metrics such as padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// A point with both coordinates set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A rectangle for widget bounds and scissor regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at `origin` with the given size.
    #[inline]
    pub const fn from_origin(origin: Point, size: Point) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Shrink by `pad.x` on the left and right and `pad.y` on the top and bottom.
    ///
    /// The result never has negative size.
    pub fn shrink(&self, pad: Point) -> Rect {
        let width = self.width.saturating_sub(pad.x.saturating_mul(2)).max(0);
        let height = self.height.saturating_sub(pad.y.saturating_mul(2)).max(0);
        Rect::new(
            self.x.saturating_add(pad.x),
            self.y.saturating_add(pad.y),
            width,
            height,
        )
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn point_arithmetic_saturates() {
        assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
        assert_eq!(Point::new(1, 2) - Point::new(3, 4), Point::new(-2, -2));
        assert_eq!(
            Point::new(i32::MAX, 0) + Point::new(1, 0),
            Point::new(i32::MAX, 0)
        );
    }

    #[test]
    fn point_constructors() {
        assert_eq!(Point::splat(4), Point::new(4, 4));
        assert_eq!(Point::from((2, 3)), Point::new(2, 3));
        assert!(Point::ZERO.is_zero());
        assert!(!Point::new(0, 1).is_zero());
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(Point::new(2, 3)));
        assert!(rect.contains(Point::new(5, 7)));
        assert!(!rect.contains(Point::new(6, 3)));
        assert!(!rect.contains(Point::new(2, 8)));
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));
    }

    #[test]
    fn rect_intersection_no_overlap_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(3, 3, 2, 2);
        assert_eq!(a.intersection(&b), Rect::default());
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn rect_shrink_by_padding() {
        let rect = Rect::new(0, 0, 20, 10);
        assert_eq!(rect.shrink(Point::new(4, 2)), Rect::new(4, 2, 12, 6));
    }

    #[test]
    fn rect_shrink_clamps_to_empty() {
        let rect = Rect::new(10, 10, 4, 4);
        let inner = rect.shrink(Point::new(8, 8));
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
        assert!(inner.is_empty());
    }

    #[test]
    fn rect_from_origin() {
        let rect = Rect::from_origin(Point::new(3, 4), Point::new(5, 6));
        assert_eq!(rect, Rect::new(3, 4, 5, 6));
        assert_eq!(rect.origin(), Point::new(3, 4));
        assert_eq!(rect.right(), 8);
        assert_eq!(rect.bottom(), 10);
    }
}
