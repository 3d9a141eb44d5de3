//! Line rasterizers.
//!
//! Three interchangeable algorithms with the same shape,
//! `fn(start, end, color) -> Vec<Pixel>`:
//!
//! - [`bresenham_line`]: integer decision variable, endpoints snapped to cells
//! - [`dda_line`]: floating-point stepping, every sample snapped to a cell
//! - [`wu_line`]: antialiased, two pixels per step with fractional coverage
//!
//! All three are total: a zero-length segment yields exactly one pixel.

use std::ops::RangeInclusive;

use crate::color::Rgba;
use crate::geometry::{round_half_up, Point};
use crate::log::trace;
use crate::pixel::Pixel;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Bresenham's integer algorithm.
    #[default]
    Bresenham,
    /// Digital differential analyzer.
    Dda,
    /// Xiaolin Wu's antialiased algorithm.
    Wu,
}

impl LineAlgorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 3] = [Self::Bresenham, Self::Dda, Self::Wu];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bresenham => "bresenham",
            Self::Dda => "dda",
            Self::Wu => "wu",
        }
    }
}

/// Rasterize a segment with the chosen algorithm.
#[must_use]
pub fn rasterize_line(start: Point, end: Point, color: Rgba, algorithm: LineAlgorithm) -> Vec<Pixel> {
    let pixels = match algorithm {
        LineAlgorithm::Bresenham => bresenham_line(start, end, color),
        LineAlgorithm::Dda => dda_line(start, end, color),
        LineAlgorithm::Wu => wu_line(start, end, color),
    };
    trace!(
        algorithm = algorithm.name(),
        ?start,
        ?end,
        pixels = pixels.len(),
        "rasterized line"
    );
    pixels
}

// ============================================================================
// Bresenham
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Endpoints are snapped to their cells first. Shallow lines
/// (`|dy| < |dx|`) step along x left to right; all others step along y
/// bottom to top, so the output does not depend on endpoint order.
#[must_use]
pub fn bresenham_line(start: Point, end: Point, color: Rgba) -> Vec<Pixel> {
    BresenhamCells::new(start.cell(), end.cell())
        .map(|(x, y)| Pixel::new(x, y, color))
        .collect()
}

/// Cells of a Bresenham segment, walked along its major axis.
///
/// Deltas and the decision variable are `i64`: saturated cells at opposite
/// ends of the `i32` range are `2^32 - 1` apart.
#[derive(Debug, Clone)]
struct BresenhamCells {
    major: RangeInclusive<i32>,
    minor: i64,
    minor_step: i64,
    delta_major: i64,
    delta_minor: i64,
    decision: i64,
    steep: bool,
}

impl BresenhamCells {
    fn new((x0, y0): (i32, i32), (x1, y1): (i32, i32)) -> Self {
        let dx = i64::from(x1) - i64::from(x0);
        let dy = i64::from(y1) - i64::from(y0);
        let steep = dy.abs() >= dx.abs();

        // (major, minor) pairs, ordered by the major coordinate.
        let (mut from, mut to) = if steep { ((y0, x0), (y1, x1)) } else { ((x0, y0), (x1, y1)) };
        if from.0 > to.0 {
            std::mem::swap(&mut from, &mut to);
        }

        let delta_major = i64::from(to.0) - i64::from(from.0);
        let delta_minor = (i64::from(to.1) - i64::from(from.1)).abs();

        Self {
            major: from.0..=to.0,
            minor: i64::from(from.1),
            minor_step: if from.1 < to.1 { 1 } else { -1 },
            delta_major,
            delta_minor,
            decision: 2 * delta_minor - delta_major,
            steep,
        }
    }
}

impl Iterator for BresenhamCells {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let major = self.major.next()?;
        let minor = self.minor as i32;

        if self.decision >= 0 {
            self.minor += self.minor_step;
            self.decision += 2 * (self.delta_minor - self.delta_major);
        } else {
            self.decision += 2 * self.delta_minor;
        }

        Some(if self.steep { (minor, major) } else { (major, minor) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.major.size_hint()
    }
}

// ============================================================================
// DDA
// ============================================================================

/// Draw a line with a digital differential analyzer.
///
/// Takes `max(|dx|, |dy|)` unit steps (rounded up for fractional extents)
/// and emits `steps + 1` samples. Samples that snap to the same cell are
/// kept; callers can run [`dedup_pixels`](crate::pixel::dedup_pixels).
#[must_use]
pub fn dda_line(start: Point, end: Point, color: Rgba) -> Vec<Pixel> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let steps = dx.abs().max(dy.abs()).ceil();

    if steps == 0.0 {
        return vec![Pixel::at(start, color)];
    }

    let x_inc = dx / steps;
    let y_inc = dy / steps;
    let count = steps as usize;

    let mut x = start.x;
    let mut y = start.y;
    let mut pixels = Vec::with_capacity(count + 1);
    for _ in 0..=count {
        pixels.push(Pixel::at(Point::new(x, y), color));
        x += x_inc;
        y += y_inc;
    }
    pixels
}

// ============================================================================
// Wu
// ============================================================================

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Wu's algorithm draws two pixels at each step along the major axis,
/// adjusting their coverage based on the fractional distance from the ideal
/// line position. Each endpoint gets a pair of pixels weighted by its
/// horizontal gap as well.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
#[must_use]
pub fn wu_line(start: Point, end: Point, color: Rgba) -> Vec<Pixel> {
    if start == end {
        return vec![Pixel::at(start, color)];
    }

    let (mut x0, mut y0, mut x1, mut y1) = (start.x, start.y, end.x, end.y);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let mut pixels = Vec::new();
    let mut plot = |major: i32, minor: i32, coverage: f64| {
        let (x, y) = if steep { (minor, major) } else { (major, minor) };
        pixels.push(Pixel::new(x, y, color.with_coverage(coverage as f32)));
    };

    // First endpoint
    let x_end = round_half_up(x0);
    let y_end = y0 + gradient * (x_end - x0);
    let x_gap = rfpart(x0 + 0.5);
    let x_pixel1 = x_end as i32;
    let y_pixel1 = y_end.floor() as i32;
    plot(x_pixel1, y_pixel1, rfpart(y_end) * x_gap);
    plot(x_pixel1, y_pixel1 + 1, fpart(y_end) * x_gap);

    let mut inter_y = y_end + gradient;

    // Second endpoint
    let x_end = round_half_up(x1);
    let y_end = y1 + gradient * (x_end - x1);
    let x_gap = fpart(x1 + 0.5);
    let x_pixel2 = x_end as i32;
    let y_pixel2 = y_end.floor() as i32;
    plot(x_pixel2, y_pixel2, rfpart(y_end) * x_gap);
    plot(x_pixel2, y_pixel2 + 1, fpart(y_end) * x_gap);

    // Main loop
    for x in (x_pixel1 + 1)..x_pixel2 {
        let base = inter_y.floor() as i32;
        plot(x, base, rfpart(inter_y));
        plot(x, base + 1, fpart(inter_y));
        inter_y += gradient;
    }

    pixels
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}
