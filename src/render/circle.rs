//! Midpoint circle rasterization.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::log::trace;
use crate::pixel::{dedup_pixels, Pixel};
use crate::vec2::{circle_symmetry, Vec2};

/// Draw a circle outline using the midpoint (Jesko) algorithm.
///
/// Only the first octant is walked, from `(radius, 0)` while `x >= y`; the
/// other seven come from [`circle_symmetry`]. The decision variable starts
/// at `radius / 16` and accumulates `y`; once `decision - x` is non-negative
/// the walk takes a diagonal step.
///
/// A zero radius yields the center cell, a negative radius nothing. Octant
/// boundaries produce coincident cells, so the output is de-duplicated.
#[must_use]
pub fn midpoint_circle(center: Point, radius: i32, color: Rgba) -> Vec<Pixel> {
    let mut decision = f64::from(radius) / 16.0;
    let mut x = radius;
    let mut y = 0;
    let mut pixels = Vec::new();

    while x >= y {
        for offset in circle_symmetry(Vec2::new(f64::from(x), f64::from(y))) {
            pixels.push(Pixel::at(center.offset(offset), color));
        }

        y += 1;
        decision += f64::from(y);
        let next = decision - f64::from(x);
        if next >= 0.0 {
            decision = next;
            x -= 1;
        }
    }

    let pixels = dedup_pixels(pixels);
    trace!(?center, radius, pixels = pixels.len(), "rasterized circle");
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cell_set(pixels: &[Pixel]) -> HashSet<(i32, i32)> {
        pixels.iter().map(Pixel::cell).collect()
    }

    #[test]
    fn test_radius_three() {
        let pixels = midpoint_circle(Point::ORIGIN, 3, Rgba::GREEN);
        let expected: HashSet<(i32, i32)> = [
            (3, 0),
            (3, 1),
            (3, -1),
            (-3, 0),
            (-3, 1),
            (-3, -1),
            (0, 3),
            (1, 3),
            (-1, 3),
            (0, -3),
            (1, -3),
            (-1, -3),
            (2, 2),
            (2, -2),
            (-2, 2),
            (-2, -2),
        ]
        .into_iter()
        .collect();
        assert_eq!(cell_set(&pixels), expected);
        assert_eq!(pixels.len(), 16);
    }

    #[test]
    fn test_radius_five_count() {
        let pixels = midpoint_circle(Point::ORIGIN, 5, Rgba::GREEN);
        assert_eq!(pixels.len(), 28);
    }

    #[test]
    fn test_no_duplicate_cells() {
        for radius in 0..20 {
            let pixels = midpoint_circle(Point::new(1.0, -2.0), radius, Rgba::BLACK);
            assert_eq!(cell_set(&pixels).len(), pixels.len(), "radius {radius}");
        }
    }

    #[test]
    fn test_zero_radius_is_center() {
        let pixels = midpoint_circle(Point::new(4.0, -7.0), 0, Rgba::RED);
        assert_eq!(pixels, vec![Pixel::new(4, -7, Rgba::RED)]);
    }

    #[test]
    fn test_negative_radius_is_empty() {
        assert!(midpoint_circle(Point::ORIGIN, -3, Rgba::RED).is_empty());
    }

    #[test]
    fn test_translated_by_center() {
        let at_origin = cell_set(&midpoint_circle(Point::ORIGIN, 6, Rgba::RED));
        let moved: HashSet<(i32, i32)> = midpoint_circle(Point::new(5.0, -3.0), 6, Rgba::RED)
            .iter()
            .map(|p| (p.x - 5, p.y + 3))
            .collect();
        assert_eq!(at_origin, moved);
    }

    #[test]
    fn test_pixels_near_true_radius() {
        let radius = 12;
        for p in midpoint_circle(Point::ORIGIN, radius, Rgba::RED) {
            let r = f64::from(p.x).hypot(f64::from(p.y));
            assert!((r - f64::from(radius)).abs() <= 1.0, "{:?} at distance {r}", p.cell());
        }
    }
}
