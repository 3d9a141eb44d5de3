//! 2D displacement vectors and the symmetry transforms built on them.
//!
//! A [`Vec2`] is an offset, never a position: conic rasterizers compute one
//! offset from the center and derive the mirrored offsets with
//! [`circle_symmetry`] and [`ellipse_symmetry`].

use std::f64::consts::FRAC_PI_2;
use std::ops::{Add, Mul, Neg, Sub};

use crate::geometry::Point;

/// Lengths at or below this are treated as zero by [`Vec2::normalize`].
const NORMALIZE_EPSILON: f64 = 1e-6;

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(end.x - start.x, end.y - start.y)
    }

    /// Multiply both components by `scalar`.
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, without the square root.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or zero for (near) zero vectors.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len <= NORMALIZE_EPSILON {
            return Self::ZERO;
        }
        Self::new(self.x / len, self.y / len)
    }

    /// Rotate counter-clockwise by `angle` radians.
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Mirror across the x axis (flip y).
    #[must_use]
    pub fn reflect_x(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Mirror across the y axis (flip x).
    #[must_use]
    pub fn reflect_y(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Point reflection through the origin.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// The four mirror images of `offset` about both axes.
///
/// Order: original, x-mirror, y-mirror, negated.
#[must_use]
pub fn ellipse_symmetry(offset: Vec2) -> [Vec2; 4] {
    [
        offset,
        offset.reflect_x(),
        offset.reflect_y(),
        offset.negate(),
    ]
}

/// The eight octant images of `offset`.
///
/// The first four are [`ellipse_symmetry`] of `offset`; the last four are the
/// same mirrors applied to `offset` rotated by 90 degrees, which covers the
/// diagonal reflections. Rotation goes through floating point, so callers
/// snap the results to cells.
#[must_use]
pub fn circle_symmetry(offset: Vec2) -> [Vec2; 8] {
    let [a, b, c, d] = ellipse_symmetry(offset);
    let [e, f, g, h] = ellipse_symmetry(offset.rotate(FRAC_PI_2));
    [a, b, c, d, e, f, g, h]
}
