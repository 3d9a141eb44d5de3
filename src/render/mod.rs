//! Rasterization of geometric primitives onto the logical grid.
//!
//! Every rasterizer is a pure function from real-valued geometry to a list of
//! [`Pixel`]s. Nothing here touches a framebuffer; [`paint::GridCanvas`]
//! turns pixel lists into device output.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer decision variable
//! - **DDA Line**: floating-point stepping
//! - **Wu's Anti-aliased Line**: fractional coverage in the alpha channel
//! - **Midpoint Circle / Ellipse**: octant and quadrant symmetry
//! - **Scanline Fill**: edge table / active edge table polygon fill
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod paint;
pub mod polygon;

pub use circle::midpoint_circle;
pub use ellipse::{midpoint_ellipse, midpoint_ellipse_rotated};
pub use line::{bresenham_line, dda_line, rasterize_line, wu_line, LineAlgorithm};
pub use paint::GridCanvas;
pub use polygon::scanline_fill;

use crate::clip::{liang_barsky, sutherland_hodgman};
use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::pixel::Pixel;

/// A primitive that can be turned into grid pixels.
pub trait Rasterize {
    /// Rasterize this primitive with a single color.
    fn rasterize(&self, color: Rgba) -> Vec<Pixel>;
}

// ============================================================================
// Line
// ============================================================================

/// A line segment and the algorithm used to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Rasterization algorithm.
    pub algorithm: LineAlgorithm,
}

impl Line {
    /// Create a Bresenham line.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            algorithm: LineAlgorithm::default(),
        }
    }

    /// Select the rasterization algorithm.
    #[must_use]
    pub fn algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Segment length in logical units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// The part of this line inside `window`, or `None` if it misses.
    #[must_use]
    pub fn clipped(&self, window: &Rect) -> Option<Self> {
        liang_barsky(window, self.start, self.end).map(|[start, end]| Self {
            start,
            end,
            algorithm: self.algorithm,
        })
    }
}

impl Rasterize for Line {
    fn rasterize(&self, color: Rgba) -> Vec<Pixel> {
        rasterize_line(self.start, self.end, color, self.algorithm)
    }
}

// ============================================================================
// Circle / Ellipse
// ============================================================================

/// Circle outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in cells.
    pub radius: i32,
}

impl Circle {
    /// Create a circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

impl Rasterize for Circle {
    fn rasterize(&self, color: Rgba) -> Vec<Pixel> {
        midpoint_circle(self.center, self.radius, color)
    }
}

/// Ellipse outline, optionally rotated about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Semi-axis along x before rotation, in cells.
    pub radius_x: i32,
    /// Semi-axis along y before rotation, in cells.
    pub radius_y: i32,
    /// Counter-clockwise rotation in radians.
    pub rotation: f64,
}

impl Ellipse {
    /// Create an axis-aligned ellipse.
    #[must_use]
    pub const fn new(center: Point, radius_x: i32, radius_y: i32) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            rotation: 0.0,
        }
    }

    /// Set the rotation in radians.
    #[must_use]
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Rasterize for Ellipse {
    fn rasterize(&self, color: Rgba) -> Vec<Pixel> {
        midpoint_ellipse_rotated(
            self.center,
            self.radius_x,
            self.radius_y,
            self.rotation,
            color,
        )
    }
}

// ============================================================================
// Polygon
// ============================================================================

/// Filled polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Vertices in order; the last connects back to the first.
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: impl Into<Vec<Point>>) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Clip against a convex, counter-clockwise window.
    ///
    /// The result may be empty.
    #[must_use]
    pub fn clipped(&self, window: &[Point]) -> Self {
        Self::new(sutherland_hodgman(&self.vertices, window))
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        Self::new(rect.corners())
    }
}

impl Rasterize for Polygon {
    fn rasterize(&self, color: Rgba) -> Vec<Pixel> {
        scanline_fill(&self.vertices, color)
    }
}
