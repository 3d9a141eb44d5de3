//! Line and polygon clipping against a window.
//!
//! - [`liang_barsky`]: parametric segment clipping against an axis-aligned
//!   rectangle.
//! - [`sutherland_hodgman`]: re-entrant polygon clipping against a convex,
//!   counter-clockwise window.
//!
//! Both run before rasterization and return real-valued geometry.

use crate::geometry::{Point, Rect};
use crate::log::debug;
use crate::vec2::Vec2;

/// Determinants smaller than this mark parallel or collinear edges.
pub const PARALLEL_TOLERANCE: f64 = 1e-10;

// ============================================================================
// Liang-Barsky parametric line clipping
// ============================================================================

/// Clip a line segment against a rectangle using the Liang-Barsky algorithm.
///
/// The segment is `start + t * (end - start)` for `t` in `[0, 1]`. Each of
/// the four window edges gives a `p`/`q` pair; `p < 0` bounds the entry
/// parameter from below, `p > 0` bounds the exit parameter from above and
/// `p == 0` with `q < 0` means the segment runs parallel to, and outside of,
/// that edge.
///
/// Returns the endpoints at the entry and exit parameters, unrounded, or
/// `None` when no part of the segment lies in the window.
#[must_use]
pub fn liang_barsky(rect: &Rect, start: Point, end: Point) -> Option<[Point; 2]> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let p = [-dx, dx, -dy, dy];
    let q = [
        start.x - rect.x,
        rect.max_x() - start.x,
        start.y - rect.y,
        rect.max_y() - start.y,
    ];

    if p.iter().zip(&q).any(|(&p, &q)| p == 0.0 && q < 0.0) {
        debug!(?start, ?end, ?rect, "segment parallel to and outside the window");
        return None;
    }

    let mut t_entry: f64 = 0.0;
    let mut t_exit: f64 = 1.0;

    for (&p, &q) in p.iter().zip(&q) {
        if p == 0.0 {
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_entry = t_entry.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
    }

    if t_entry > t_exit {
        debug!(?start, ?end, ?rect, t_entry, t_exit, "segment outside the window");
        return None;
    }

    Some([start.lerp(end, t_entry), start.lerp(end, t_exit)])
}

// ============================================================================
// Sutherland-Hodgman polygon clipping
// ============================================================================

/// Clip a polygon against a convex window with the Sutherland-Hodgman algorithm.
///
/// The window must be wound counter-clockwise (y up): a point is inside an
/// edge when it lies on or to the left of it. For every window edge the
/// current polygon is walked once, keeping inside vertices and inserting the
/// crossing point wherever consecutive vertices straddle the edge. Crossings
/// with (near) parallel edges are skipped.
///
/// An empty subject or window yields an empty polygon.
#[must_use]
pub fn sutherland_hodgman(subject: &[Point], window: &[Point]) -> Vec<Point> {
    if subject.is_empty() || window.is_empty() {
        return Vec::new();
    }

    let mut output = subject.to_vec();

    for (i, &edge_start) in window.iter().enumerate() {
        let edge_end = window[(i + 1) % window.len()];
        if output.is_empty() {
            break;
        }

        let input = std::mem::take(&mut output);
        let n = input.len();

        for (j, &current) in input.iter().enumerate() {
            let previous = input[(j + n - 1) % n];
            let current_inside = is_inside(current, edge_start, edge_end);
            let previous_inside = is_inside(previous, edge_start, edge_end);

            if current_inside != previous_inside {
                if let Some(crossing) = intersection(previous, current, edge_start, edge_end) {
                    output.push(crossing);
                }
            }
            if current_inside {
                output.push(current);
            }
        }
    }

    if output.is_empty() {
        debug!(subject = subject.len(), window = window.len(), "polygon clipped away");
    }
    output
}

/// Whether `point` is on or left of the directed edge.
fn is_inside(point: Point, edge_start: Point, edge_end: Point) -> bool {
    Vec2::between(edge_start, edge_end).cross(Vec2::between(edge_start, point)) >= 0.0
}

/// Intersection of the line through `a`-`b` with the line through `c`-`d`.
fn intersection(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    let denominator = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
    if denominator.abs() < PARALLEL_TOLERANCE {
        return None;
    }

    let t = ((a.x - c.x) * (c.y - d.y) - (a.y - c.y) * (c.x - d.x)) / denominator;
    Some(a.lerp(b, t))
}
