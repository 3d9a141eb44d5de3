//! Logical grid to device coordinate mapping.
//!
//! The logical grid has `N` cells per axis, is centered on the origin and has
//! y pointing up. The device space has its origin in the top-left corner and
//! y pointing down, with `U = device_size / N` device units per cell:
//!
//! ```text
//! to_device(x, y) = ((x + N/2) * U, (N/2 - y) * U)
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{round_half_up, Point, Rect};
use crate::log::debug;
use crate::scale::{LinearScale, Scale};

/// A point in device space (origin top-left, y down).
pub type DevicePoint = Point;

/// Grid size settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Number of cells along each axis. Must be even and non-zero.
    pub cells: u32,
    /// Device extent along each axis.
    pub device_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cells: Self::DEFAULT_CELLS,
            device_size: Self::DEFAULT_DEVICE_SIZE,
        }
    }
}

impl GridConfig {
    /// Default cell count per axis.
    pub const DEFAULT_CELLS: u32 = 40;
    /// Default device extent per axis.
    pub const DEFAULT_DEVICE_SIZE: f64 = 600.0;

    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if `cells` is zero or odd, or if
    /// `device_size` is not a positive finite number.
    pub fn new(cells: u32, device_size: f64) -> Result<Self> {
        Self { cells, device_size }.validated()
    }

    /// Set the cell count.
    #[must_use]
    pub fn with_cells(mut self, cells: u32) -> Self {
        self.cells = cells;
        self
    }

    /// Set the device extent.
    #[must_use]
    pub fn with_device_size(mut self, device_size: f64) -> Self {
        self.device_size = device_size;
        self
    }

    /// Check the configuration, returning it unchanged when valid.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GridConfig::new`].
    pub fn validated(self) -> Result<Self> {
        let cells_ok = self.cells > 0 && self.cells % 2 == 0;
        let size_ok = self.device_size.is_finite() && self.device_size > 0.0;
        if cells_ok && size_ok {
            return Ok(self);
        }
        debug!(cells = self.cells, device_size = self.device_size, "rejecting grid config");
        Err(Error::InvalidGrid {
            cells: self.cells,
            device_size: self.device_size,
        })
    }

    /// Device units per cell.
    #[must_use]
    pub fn unit(&self) -> f64 {
        self.device_size / f64::from(self.cells)
    }
}

/// Bidirectional mapping between logical cells and device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapper {
    config: GridConfig,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl Default for GridMapper {
    fn default() -> Self {
        Self::from_valid(GridConfig::default())
    }
}

impl GridMapper {
    /// Create a mapper for a grid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if the configuration is invalid.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validated().map(Self::from_valid)
    }

    fn from_valid(config: GridConfig) -> Self {
        let half = f64::from(config.cells / 2);
        Self {
            config,
            x_scale: LinearScale::from_parts((-half, half), (0.0, config.device_size)),
            y_scale: LinearScale::from_parts((-half, half), (config.device_size, 0.0)),
        }
    }

    /// The configuration this mapper was built from.
    #[must_use]
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Device units per cell.
    #[must_use]
    pub fn unit(&self) -> f64 {
        self.config.unit()
    }

    /// Half the cell count, i.e. the largest visible logical coordinate.
    #[must_use]
    pub const fn half_cells(&self) -> i32 {
        (self.config.cells / 2) as i32
    }

    /// Map a logical point to device space.
    #[must_use]
    pub fn to_device(&self, p: Point) -> DevicePoint {
        Point::new(self.x_scale.scale(p.x), self.y_scale.scale(p.y))
    }

    /// Map a device point back to the nearest logical cell.
    #[must_use]
    pub fn to_logical(&self, d: DevicePoint) -> Point {
        Point::new(
            round_half_up(self.x_scale.invert(d.x)),
            round_half_up(self.y_scale.invert(d.y)),
        )
    }

    /// Device rectangle covered by a logical cell.
    ///
    /// The rectangle is one unit square centered on the cell's device point,
    /// with `(x, y)` its top-left corner.
    #[must_use]
    pub fn cell_rect(&self, x: i32, y: i32) -> Rect {
        let unit = self.unit();
        let center = self.to_device(Point::from_cell(x, y));
        Rect::new(center.x - unit / 2.0, center.y - unit / 2.0, unit, unit)
    }

    /// Whether a cell lies on the visible grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let half = self.half_cells();
        (-half..=half).contains(&x) && (-half..=half).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.cells, 40);
        assert_relative_eq!(config.unit(), 15.0);
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(GridConfig::new(0, 600.0).is_err());
        assert!(GridConfig::new(41, 600.0).is_err());
        assert!(GridConfig::new(40, 0.0).is_err());
        assert!(GridConfig::new(40, -10.0).is_err());
        assert!(GridConfig::new(40, f64::INFINITY).is_err());
        assert!(matches!(
            GridMapper::new(GridConfig::default().with_cells(3)),
            Err(Error::InvalidGrid { cells: 3, .. })
        ));
    }

    #[test]
    fn test_to_device_origin_is_center() {
        let mapper = GridMapper::default();
        let d = mapper.to_device(Point::ORIGIN);
        assert_relative_eq!(d.x, 300.0);
        assert_relative_eq!(d.y, 300.0);
    }

    #[test]
    fn test_to_device_axes() {
        let mapper = GridMapper::default();
        // Top-left corner of the grid.
        let d = mapper.to_device(Point::new(-20.0, 20.0));
        assert_relative_eq!(d.x, 0.0);
        assert_relative_eq!(d.y, 0.0, epsilon = 1e-9);
        // y up in logical space is y down in device space.
        let d = mapper.to_device(Point::new(3.0, -2.0));
        assert_relative_eq!(d.x, 345.0, epsilon = 1e-9);
        assert_relative_eq!(d.y, 330.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_logical_rounds() {
        let mapper = GridMapper::default();
        assert_eq!(mapper.to_logical(Point::new(346.0, 329.0)), Point::new(3.0, -2.0));
        assert_eq!(mapper.to_logical(Point::new(0.0, 600.0)), Point::new(-20.0, -20.0));
    }

    #[test]
    fn test_round_trip_whole_grid() {
        let mapper = GridMapper::new(GridConfig::new(20, 500.0).unwrap()).unwrap();
        for x in -10..=10 {
            for y in -10..=10 {
                let p = Point::from_cell(x, y);
                assert_eq!(mapper.to_logical(mapper.to_device(p)), p);
            }
        }
    }

    #[test]
    fn test_cell_rect() {
        let mapper = GridMapper::default();
        let r = mapper.cell_rect(0, 0);
        assert_relative_eq!(r.x, 292.5);
        assert_relative_eq!(r.y, 292.5);
        assert_relative_eq!(r.width, 15.0);
        assert_relative_eq!(r.height, 15.0);
    }

    #[test]
    fn test_contains() {
        let mapper = GridMapper::default();
        assert!(mapper.contains(0, 0));
        assert!(mapper.contains(20, -20));
        assert!(!mapper.contains(21, 0));
        assert!(!mapper.contains(0, -21));
    }
}
