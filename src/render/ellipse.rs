//! Midpoint ellipse rasterization.
//!
//! The first quadrant is split where the outline's slope crosses -1. Region 1
//! starts at the top, `(0, ry)`, and steps x every iteration; region 2 picks
//! up from the last point and steps y down to zero. Each visited point is
//! mirrored into the other quadrants with [`ellipse_symmetry`].

use crate::color::Rgba;
use crate::geometry::Point;
use crate::log::trace;
use crate::pixel::{dedup_pixels, Pixel};
use crate::vec2::{ellipse_symmetry, Vec2};

/// Draw an axis-aligned ellipse outline.
///
/// Negative radii yield no pixels. The output is de-duplicated because the
/// axis points are generated by more than one mirror.
#[must_use]
pub fn midpoint_ellipse(center: Point, radius_x: i32, radius_y: i32, color: Rgba) -> Vec<Pixel> {
    let pixels = quadrant_offsets(radius_x, radius_y)
        .into_iter()
        .flat_map(ellipse_symmetry)
        .map(|offset| Pixel::at(center.offset(offset), color))
        .collect();

    let pixels = dedup_pixels(pixels);
    trace!(?center, radius_x, radius_y, pixels = pixels.len(), "rasterized ellipse");
    pixels
}

/// Draw an ellipse outline rotated counter-clockwise by `rotation` radians
/// about its center.
///
/// Every mirrored offset is rotated before it is snapped to a cell. A zero
/// rotation is exactly [`midpoint_ellipse`].
#[must_use]
pub fn midpoint_ellipse_rotated(
    center: Point,
    radius_x: i32,
    radius_y: i32,
    rotation: f64,
    color: Rgba,
) -> Vec<Pixel> {
    if rotation == 0.0 {
        return midpoint_ellipse(center, radius_x, radius_y, color);
    }

    let pixels = quadrant_offsets(radius_x, radius_y)
        .into_iter()
        .flat_map(ellipse_symmetry)
        .map(|offset| Pixel::at(center.offset(offset.rotate(rotation)), color))
        .collect();

    let pixels = dedup_pixels(pixels);
    trace!(
        ?center,
        radius_x,
        radius_y,
        rotation,
        pixels = pixels.len(),
        "rasterized rotated ellipse"
    );
    pixels
}

/// Walk the first quadrant and return the visited offsets in order.
fn quadrant_offsets(radius_x: i32, radius_y: i32) -> Vec<Vec2> {
    if radius_x < 0 || radius_y < 0 {
        return Vec::new();
    }

    let rx2 = f64::from(radius_x) * f64::from(radius_x);
    let ry2 = f64::from(radius_y) * f64::from(radius_y);

    let mut x = 0.0;
    let mut y = f64::from(radius_y);
    let mut offsets = Vec::new();

    // Region 1: |slope| < 1
    let mut decision = ry2 - rx2 * y + 0.25 * rx2;
    let mut dx = 2.0 * ry2 * x;
    let mut dy = 2.0 * rx2 * y;

    while dx < dy {
        offsets.push(Vec2::new(x, y));

        x += 1.0;
        dx += 2.0 * ry2;
        if decision < 0.0 {
            decision += dx + ry2;
        } else {
            y -= 1.0;
            dy -= 2.0 * rx2;
            decision += dx - dy + ry2;
        }
    }

    // Region 2: |slope| >= 1
    let mut decision = ry2 * (x + 0.5) * (x + 0.5) + rx2 * (y - 1.0) * (y - 1.0) - rx2 * ry2;

    while y >= 0.0 {
        offsets.push(Vec2::new(x, y));

        y -= 1.0;
        dy -= 2.0 * rx2;
        if decision > 0.0 {
            decision += rx2 - dy;
        } else {
            x += 1.0;
            dx += 2.0 * ry2;
            decision += dx - dy + rx2;
        }
    }

    offsets
}
