//! Scanline polygon fill.
//!
//! Classic edge table / active edge table fill. Edges live in one array and
//! the edge table is a map from starting scanline to edge indices; the active
//! list holds indices into the same array, so advancing an edge is a field
//! update rather than a relink.

use std::collections::BTreeMap;

use crate::color::Rgba;
use crate::geometry::{to_cell, Point};
use crate::log::trace;
use crate::pixel::Pixel;

/// Intercepts closer than this are ordered by slope instead of position.
const INTERCEPT_TOLERANCE: f64 = 1e-6;

/// A non-horizontal polygon edge, alive between its start scanline and `y_max`.
#[derive(Debug, Clone, Copy)]
struct Edge {
    /// Last scanline the edge crosses.
    y_max: i32,
    /// Intercept with the current scanline.
    x: f64,
    /// dx/dy.
    inv_slope: f64,
}

/// A vertex snapped to the grid rows, x kept real.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    x: f64,
    y: i32,
}

/// Fill the interior of a polygon, boundary cells included.
///
/// Vertices are snapped to their cells first. Fewer than three vertices
/// yield no pixels. Horizontal edges contribute no crossings.
///
/// Where a vertex sits strictly between its two neighbours in y (the outline
/// passes through it rather than turning), the edge leaving it upward starts
/// one scanline later, one `inv_slope` step further along. That keeps the
/// vertex from counting as two crossings on its scanline.
///
/// Active edges are paired in x order, `(0, 1), (2, 3), ...`, and every cell
/// between a pair's rounded intercepts is filled. A leftover unpaired edge
/// fills nothing.
#[must_use]
pub fn scanline_fill(vertices: &[Point], color: Rgba) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    if vertices.len() < 3 {
        return pixels;
    }

    let vertices: Vec<Vertex> = vertices
        .iter()
        .map(|p| Vertex {
            x: f64::from(to_cell(p.x)),
            y: to_cell(p.y),
        })
        .collect();

    let min_y = vertices.iter().map(|v| v.y).min().unwrap_or_default();
    let max_y = vertices.iter().map(|v| v.y).max().unwrap_or_default();

    let (mut edges, table) = build_edge_table(&vertices);
    let mut active: Vec<usize> = Vec::new();

    for y in min_y..=max_y {
        if let Some(starting) = table.get(&y) {
            active.extend_from_slice(starting);
        }

        active.sort_by(|&a, &b| {
            let (a, b) = (&edges[a], &edges[b]);
            intercept_key(a.x)
                .cmp(&intercept_key(b.x))
                .then(a.inv_slope.total_cmp(&b.inv_slope))
        });

        for pair in active.chunks_exact(2) {
            let x_start = to_cell(edges[pair[0]].x);
            let x_end = to_cell(edges[pair[1]].x);
            pixels.extend((x_start..=x_end).map(|x| Pixel::new(x, y, color)));
        }

        active.retain(|&i| edges[i].y_max != y);
        for &i in &active {
            edges[i].x += edges[i].inv_slope;
        }
    }

    trace!(
        vertices = vertices.len(),
        min_y,
        max_y,
        pixels = pixels.len(),
        "filled polygon"
    );
    pixels
}

/// Build the edge array and the map from starting scanline to edge indices.
fn build_edge_table(vertices: &[Vertex]) -> (Vec<Edge>, BTreeMap<i32, Vec<usize>>) {
    let n = vertices.len();
    let mut edges = Vec::with_capacity(n);
    let mut table: BTreeMap<i32, Vec<usize>> = BTreeMap::new();

    for i in 0..n {
        let before = vertices[(i + n - 1) % n];
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        let after = vertices[(i + 2) % n];

        if p1.y == p2.y {
            continue;
        }

        let inv_slope = (p1.x - p2.x) / (f64::from(p1.y) - f64::from(p2.y));
        let (lower, y_max) = if p1.y < p2.y { (p1, p2.y) } else { (p2, p1.y) };
        let mut start_y = lower.y;
        let mut x = lower.x;

        let rising_through_p1 = p1.y < p2.y && p1.y > before.y;
        let falling_through_p2 = p2.y < p1.y && p2.y > after.y;
        if rising_through_p1 || falling_through_p2 {
            start_y += 1;
            x += inv_slope;
        }

        table.entry(start_y).or_default().push(edges.len());
        edges.push(Edge {
            y_max,
            x,
            inv_slope,
        });
    }

    (edges, table)
}

/// Sort key that treats intercepts within [`INTERCEPT_TOLERANCE`] as equal.
fn intercept_key(x: f64) -> i64 {
    (x / INTERCEPT_TOLERANCE).round() as i64
}
