//! Geometric primitives in logical grid coordinates.
//!
//! The logical grid is centered at the origin with y increasing upward.
//! Points are real-valued; rasterizers snap them to integer cells with
//! [`round_half_up`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Round to the nearest integer, with halves rounding toward positive infinity.
///
/// This is the single rounding rule used for every point-to-cell snap in the
/// crate, so `-0.5` rounds to `0` and `2.5` rounds to `3`.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Snap a real coordinate to its integer grid cell.
#[inline]
#[must_use]
pub fn to_cell(value: f64) -> i32 {
    round_half_up(value) as i32
}

/// A 2D point in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate (up is positive).
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point from integer cell coordinates.
    #[must_use]
    pub fn from_cell(x: i32, y: i32) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }

    /// Snap to the nearest integer cell.
    #[must_use]
    pub fn cell(self) -> (i32, i32) {
        (to_cell(self.x), to_cell(self.y))
    }

    /// Snap both coordinates to the nearest integer cell, keeping `f64`.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(round_half_up(self.x), round_half_up(self.y))
    }

    /// Translate by a displacement.
    #[must_use]
    pub fn offset(self, v: Vec2) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        Vec2::between(self, other).length()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::from_cell(x, y)
    }
}

/// An axis-aligned rectangle.
///
/// In logical space `(x, y)` is the minimum corner and the rectangle extends
/// toward positive x and y. Device rectangles returned by the grid mapper use
/// the same layout with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// X coordinate of the minimum corner.
    pub x: f64,
    /// Y coordinate of the minimum corner.
    pub y: f64,
    /// Width of the rectangle (non-negative).
    pub width: f64,
    /// Height of the rectangle (non-negative).
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle spanning two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (b.x - a.x).abs(),
            (b.y - a.y).abs(),
        )
    }

    /// Largest x coordinate.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Largest y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Get the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Corners in counter-clockwise order (y up), starting at the minimum corner.
    ///
    /// This is the winding the polygon clipper expects for its clip window.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.max_x(), self.y),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.x, self.max_y()),
        ]
    }
}
