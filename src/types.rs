//! Plane primitives for callout construction.
//!
//! All coordinates live in the rendering plane: `f64` pixels with the Y axis
//! increasing downward, matching SVG. Vector math goes through `glam::DVec2`;
//! these types are the value-level currency of the public API.

use std::fmt;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// A point in the rendering plane (pixels, Y-down).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a Point with validation (rejects NaN/infinite coordinates)
    pub fn try_new(x: f64, y: f64) -> Result<Self, NumericError> {
        for v in [x, y] {
            if v.is_nan() {
                return Err(NumericError::NaN);
            }
            if v.is_infinite() {
                return Err(NumericError::Infinite);
            }
        }
        Ok(Point { x, y })
    }

    /// Calculate the midpoint between two points
    pub fn midpoint(self, other: Self) -> Self {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.to_vec() - other.to_vec()).length()
    }

    /// Check if both coordinates are finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub(crate) fn to_vec(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    #[inline]
    pub(crate) fn from_vec(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// 2D size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// Axis-aligned bounding box in the rendering plane.
///
/// Element lookups report their hit in this form; the resolver only ever
/// consumes the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        BBox { min, max }
    }

    /// Build from an origin-plus-extent rectangle
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        BBox {
            min: Point::new(x, y),
            max: Point::new(x + width, y + height),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_try_new_valid() {
        assert!(Point::try_new(1.0, -2.5).is_ok());
        assert!(Point::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn point_try_new_rejects_nan() {
        assert_eq!(Point::try_new(f64::NAN, 0.0), Err(NumericError::NaN));
        assert_eq!(Point::try_new(0.0, f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn point_try_new_rejects_infinity() {
        assert_eq!(
            Point::try_new(f64::INFINITY, 0.0),
            Err(NumericError::Infinite)
        );
        assert_eq!(
            Point::try_new(0.0, f64::NEG_INFINITY),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(mid, Point::new(2.0, 3.0));
    }

    #[test]
    fn point_distance() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn bbox_center() {
        let bb = BBox::from_rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bb.center(), Point::new(25.0, 40.0));
        assert_eq!(bb.width(), 30.0);
        assert_eq!(bb.height(), 40.0);
    }
}
