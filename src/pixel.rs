//! Rasterizer output records.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geometry::Point;

/// One colored grid cell.
///
/// Any partial coverage is already folded into `color.a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pixel {
    /// Cell x coordinate.
    pub x: i32,
    /// Cell y coordinate (up is positive).
    pub y: i32,
    /// Cell color.
    pub color: Rgba,
}

impl Pixel {
    /// Create a pixel at an integer cell.
    #[must_use]
    pub const fn new(x: i32, y: i32, color: Rgba) -> Self {
        Self { x, y, color }
    }

    /// Create a pixel at the cell nearest to `p`.
    #[must_use]
    pub fn at(p: Point, color: Rgba) -> Self {
        let (x, y) = p.cell();
        Self::new(x, y, color)
    }

    /// The cell coordinates.
    #[must_use]
    pub const fn cell(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Collapse pixels that share a cell.
///
/// The result keeps each cell at the position of its first occurrence and
/// takes the color of its last occurrence.
#[must_use]
pub fn dedup_pixels(pixels: Vec<Pixel>) -> Vec<Pixel> {
    let mut slots: HashMap<(i32, i32), usize> = HashMap::with_capacity(pixels.len());
    let mut out: Vec<Pixel> = Vec::with_capacity(pixels.len());

    for pixel in pixels {
        match slots.get(&pixel.cell()) {
            Some(&slot) => out[slot].color = pixel.color,
            None => {
                slots.insert(pixel.cell(), out.len());
                out.push(pixel);
            }
        }
    }

    out
}
