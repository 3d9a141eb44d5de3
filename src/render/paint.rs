//! Headless painting of pixel lists onto a device framebuffer.

use std::path::Path;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{round_half_up, Point};
use crate::grid::{GridConfig, GridMapper};
use crate::log::{debug, trace};
use crate::output::PngEncoder;
use crate::pixel::Pixel;

/// A framebuffer sized to a grid, painted in logical cells.
///
/// Each [`Pixel`] covers its device cell rectangle
/// ([`GridMapper::cell_rect`]) and is alpha-blended over what is already
/// there, so antialiased output composes.
///
/// # Example
///
/// ```
/// use grid_raster::prelude::*;
///
/// let mut canvas = GridCanvas::new(GridConfig::default()).unwrap();
/// canvas.clear(Rgba::WHITE);
/// canvas.draw_grid(Rgba::new(0, 0, 0, 40));
/// let line = Line::new(Point::from_cell(-5, -3), Point::from_cell(8, 4));
/// canvas.paint(&line.rasterize(Rgba::RED));
/// let png = canvas.to_png().unwrap();
/// assert!(!png.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GridCanvas {
    mapper: GridMapper,
    framebuffer: Framebuffer,
}

impl GridCanvas {
    /// Create a transparent canvas for a grid configuration.
    ///
    /// The framebuffer is `device_size` pixels square, rounded up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] for an invalid configuration and
    /// [`Error::InvalidDimensions`] if the device is too large to allocate.
    pub fn new(config: GridConfig) -> Result<Self> {
        let mapper = GridMapper::new(config)?;
        let side = config.device_size.ceil();
        if side > f64::from(u32::MAX) {
            return Err(Error::InvalidDimensions {
                width: u32::MAX,
                height: u32::MAX,
            });
        }
        let framebuffer = Framebuffer::new(side as u32, side as u32)?;
        debug!(cells = config.cells, side, "created grid canvas");
        Ok(Self {
            mapper,
            framebuffer,
        })
    }

    /// The mapper between cells and device coordinates.
    #[must_use]
    pub const fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// The underlying framebuffer.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Fill the whole device with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.framebuffer.clear(color);
    }

    /// Blend each pixel's cell onto the device, in order.
    ///
    /// Cells whose rectangle falls entirely off the device are skipped.
    /// Returns the number of pixels that touched the device.
    pub fn paint(&mut self, pixels: &[Pixel]) -> usize {
        let mut painted = 0;
        for pixel in pixels {
            let rect = self.mapper.cell_rect(pixel.x, pixel.y);
            if self.framebuffer.blend_rect(&rect, pixel.color) {
                painted += 1;
            }
        }
        trace!(
            pixels = pixels.len(),
            painted,
            skipped = pixels.len() - painted,
            "painted pixels"
        );
        painted
    }

    /// Draw the `cells + 1` vertical and horizontal grid lines, one device
    /// pixel wide.
    ///
    /// Lines sit at whole multiples of the unit, so they cross at cell
    /// centers and each painted cell straddles an intersection. The line on
    /// the far device edge is drawn on the last pixel row or column.
    pub fn draw_grid(&mut self, color: Rgba) {
        let cells = self.mapper.config().cells;
        let unit = self.mapper.unit();
        let width = self.framebuffer.width();
        let height = self.framebuffer.height();

        let offsets = (0..=cells).map(|i| f64::from(i) * unit);
        let columns: Vec<u32> = offsets.clone().map(|v| device_line(v, width)).collect();
        let rows: Vec<u32> = offsets.map(|v| device_line(v, height)).collect();

        // Each intersection is blended once, by its column.
        for &x in &columns {
            for y in 0..height {
                self.framebuffer.blend_pixel(x, y, color);
            }
        }
        for &y in &rows {
            for x in (0..width).filter(|x| !columns.contains(x)) {
                self.framebuffer.blend_pixel(x, y, color);
            }
        }
    }

    /// Cell under a device position, e.g. a mouse click.
    #[must_use]
    pub fn cell_at(&self, device_x: f64, device_y: f64) -> (i32, i32) {
        self.mapper.to_logical(Point::new(device_x, device_y)).cell()
    }

    /// Encode the canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.framebuffer)
    }

    /// Write the canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.framebuffer, path)
    }
}

/// Device pixel index for a grid line at coordinate `v`, kept on the device.
fn device_line(v: f64, extent: u32) -> u32 {
    let last = f64::from(extent.saturating_sub(1));
    round_half_up(v).clamp(0.0, last) as u32
}
