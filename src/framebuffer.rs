//! RGBA framebuffer for device-space output.
//!
//! Rows are padded to a 64-byte stride so each row starts aligned; use
//! [`Framebuffer::to_compact_pixels`] when a tightly packed buffer is needed.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{round_half_up, Rect};

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA bytes, `stride` bytes per row.
    pixels: Vec<u8>,
    /// Row length in bytes, including padding.
    stride: usize,
}

impl Framebuffer {
    /// Create a transparent framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(600, 600).unwrap();
    /// assert_eq!(fb.width(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes, including padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;
        for row in self.pixels.chunks_exact_mut(self.stride) {
            for px in row[..row_bytes].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Alpha-blend `color` over every pixel the device rectangle touches.
    ///
    /// Edges snap to the nearest pixel boundary (half-up), so adjacent
    /// rectangles sharing an edge tile without overlap. Parts outside the
    /// buffer are dropped; returns whether any pixel was touched.
    pub fn blend_rect(&mut self, rect: &Rect, color: Rgba) -> bool {
        let clamp_x = |v: f64| v.clamp(0.0, f64::from(self.width)) as u32;
        let clamp_y = |v: f64| v.clamp(0.0, f64::from(self.height)) as u32;

        let x1 = clamp_x(round_half_up(rect.x));
        let y1 = clamp_y(round_half_up(rect.y));
        let x2 = clamp_x(round_half_up(rect.max_x()));
        let y2 = clamp_y(round_half_up(rect.max_y()));

        if x1 >= x2 || y1 >= y2 {
            return false;
        }

        for y in y1..y2 {
            for x in x1..x2 {
                self.blend_pixel(x, y, color);
            }
        }
        true
    }

    /// Color at a pixel, `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Composite `color` over one pixel ("over" operator, straight alpha).
    ///
    /// `out = src * src_a + dst * dst_a * (1 - src_a)`, normalized by the
    /// resulting alpha. Out-of-bounds writes are ignored.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = color.alpha_fraction();
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a <= 0.0 {
            return;
        }

        let blend = |src: u8, dst: u8| -> u8 {
            let src_f = f32::from(src) / 255.0;
            let dst_f = f32::from(dst) / 255.0;
            let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
            (out * 255.0).round().clamp(0.0, 255.0) as u8
        };

        self.pixels[idx] = blend(color.r, self.pixels[idx]);
        self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
        self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
        self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Pixel data without stride padding, as PNG encoding expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        self.pixels
            .chunks_exact(self.stride)
            .flat_map(|row| &row[..row_bytes])
            .copied()
            .collect()
    }
}
