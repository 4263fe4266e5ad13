//! Geometry primitives for the 2-D device surface.
//!
//! All LED positioning uses a device-local coordinate system with the origin
//! in the top-left corner and `f64` units. [`Rectangle`] provides the two
//! queries the device lookup surface is built on: half-open point containment
//! and percentage overlap between two rectangles.

use serde::{Deserialize, Serialize};

/// A point on the device surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A two-dimensional extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Sentinel for "not yet measured": the size of a device before a
    /// layout or backend has set it.
    pub const INVALID: Self = Self {
        width: -1.0,
        height: -1.0,
    };

    /// Creates a size with the given extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if this is the [`Size::INVALID`] sentinel.
    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }
}

/// An axis-aligned rectangle, the position and extent of one LED (or a query
/// region over many).
///
/// Location and size are plain public fields; layout application rewrites
/// them in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner.
    pub location: Point,
    /// Extent from the top-left corner.
    pub size: Size,
}

impl Rectangle {
    /// Creates a rectangle from its top-left corner and extent.
    pub fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    /// Creates a rectangle from raw coordinates.
    pub fn from_values(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            location: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Returns the rightmost X coordinate (exclusive).
    pub fn right(&self) -> f64 {
        self.location.x + self.size.width
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> f64 {
        self.location.y + self.size.height
    }

    /// Returns the area covered by this rectangle, or `0.0` when either
    /// extent is non-positive.
    pub fn area(&self) -> f64 {
        if self.size.width <= 0.0 || self.size.height <= 0.0 {
            return 0.0;
        }
        self.size.width * self.size.height
    }

    /// Returns `true` if `point` lies within this rectangle.
    ///
    /// Containment is half-open on both axes: the top and left edges are
    /// inside, the bottom and right edges are not. Adjacent LEDs therefore
    /// never both contain a shared edge point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.location.x
            && point.x < self.right()
            && point.y >= self.location.y
            && point.y < self.bottom()
    }

    /// Returns the fraction of `other`'s area that overlaps this rectangle.
    ///
    /// The result is in `[0.0, 1.0]`: `0.0` when the rectangles are disjoint
    /// or either has non-positive area, `1.0` when `other` lies entirely
    /// inside this rectangle.
    pub fn intersect_percentage(&self, other: &Rectangle) -> f64 {
        let other_area = other.area();
        if self.area() == 0.0 || other_area == 0.0 {
            return 0.0;
        }

        let left = self.location.x.max(other.location.x);
        let top = self.location.y.max(other.location.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return 0.0;
        }

        ((right - left) * (bottom - top)) / other_area
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::from_values(x, y, w, h)
    }

    // ── Size ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_invalid_size_is_recognized_as_invalid() {
        assert!(Size::INVALID.is_invalid());
    }

    #[test]
    fn test_regular_size_is_not_invalid() {
        assert!(!Size::new(100.0, 50.0).is_invalid());
        assert!(!Size::new(0.0, 0.0).is_invalid());
    }

    // ── contains ──────────────────────────────────────────────────────────────

    #[test]
    fn test_contains_point_inside_rectangle() {
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(15.0, 15.0)));
    }

    #[test]
    fn test_contains_top_left_corner_is_inside() {
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_contains_bottom_right_corner_is_outside() {
        // Half-open: location + size is excluded on both axes.
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert!(!r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(15.0, 30.0)));
    }

    #[test]
    fn test_contains_point_outside_rectangle() {
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert!(!r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(100.0, 15.0)));
    }

    // ── area ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_area_of_positive_rectangle() {
        assert_eq!(rect(0.0, 0.0, 4.0, 5.0).area(), 20.0);
    }

    #[test]
    fn test_area_of_degenerate_rectangle_is_zero() {
        assert_eq!(rect(0.0, 0.0, 0.0, 5.0).area(), 0.0);
        assert_eq!(rect(0.0, 0.0, -4.0, 5.0).area(), 0.0);
    }

    // ── intersect_percentage ──────────────────────────────────────────────────

    #[test]
    fn test_intersect_percentage_disjoint_rectangles_is_zero() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.intersect_percentage(&b), 0.0);
    }

    #[test]
    fn test_intersect_percentage_edge_adjacent_rectangles_is_zero() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect_percentage(&b), 0.0);
    }

    #[test]
    fn test_intersect_percentage_fully_contained_is_one() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(25.0, 25.0, 10.0, 10.0);
        assert_eq!(outer.intersect_percentage(&inner), 1.0);
    }

    #[test]
    fn test_intersect_percentage_half_overlap() {
        // `b` sticks out of `a` by exactly half its width.
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect_percentage(&b), 0.5);
    }

    #[test]
    fn test_intersect_percentage_quarter_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect_percentage(&b), 0.25);
    }

    #[test]
    fn test_intersect_percentage_zero_area_other_is_zero() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let degenerate = rect(5.0, 5.0, 0.0, 0.0);
        assert_eq!(a.intersect_percentage(&degenerate), 0.0);
    }

    #[test]
    fn test_intersect_percentage_zero_area_self_is_zero() {
        let degenerate = rect(5.0, 5.0, 0.0, 0.0);
        let b = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(degenerate.intersect_percentage(&b), 0.0);
    }

    #[test]
    fn test_intersect_percentage_is_relative_to_other_not_self() {
        // `b` is fully inside `a`, so 100% of `b` is covered even though
        // `b` covers only 1% of `a`.
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect_percentage(&b), 1.0);
        assert!((b.intersect_percentage(&a) - 0.01).abs() < 1e-12);
    }
}
