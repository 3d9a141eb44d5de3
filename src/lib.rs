//! # Grid-Raster
//!
//! Rasterization and clipping of 2D primitives on a centered integer grid.
//!
//! Geometry is described in logical coordinates (origin at the center, y up)
//! and rasterized into cell-addressed [`Pixel`](pixel::Pixel) lists. The
//! rasterizers are pure functions; painting onto a device framebuffer and PNG
//! output are separate, optional steps.
//!
//! ## Features
//!
//! - **Lines**: Bresenham, DDA and Wu antialiased
//! - **Curves**: midpoint circle and (optionally rotated) midpoint ellipse
//! - **Fill**: edge-table scanline polygon fill
//! - **Clipping**: Liang-Barsky lines, Sutherland-Hodgman polygons
//! - **Output**: grid canvas with PNG encoding
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_raster::prelude::*;
//!
//! let pixels = bresenham_line(Point::new(0.0, 0.0), Point::new(4.0, 2.0), Rgba::RED);
//! let cells: Vec<_> = pixels.iter().map(Pixel::cell).collect();
//! assert_eq!(cells, [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
//!
//! let window = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let clipped = Line::new(Point::new(-5.0, 5.0), Point::new(15.0, 5.0)).clipped(&window);
//! assert!(clipped.is_some());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//! - `tracing`: emit `trace`/`debug` events through the `tracing` crate
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."
//! - Sutherland, I. E., & Hodgman, G. W. (1974). "Reentrant Polygon Clipping."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

// Conditional logging macros.
mod log;

/// RGBA colors.
pub mod color;

/// Points, rectangles and cell rounding.
pub mod geometry;

/// 2D vectors and symmetry helpers.
pub mod vec2;

/// Scale functions for coordinate mappings.
pub mod scale;

/// Logical grid to device mapping.
pub mod grid;

/// Grid-addressed pixels.
pub mod pixel;

// ============================================================================
// Rasterization and Clipping
// ============================================================================

/// Rasterizers and shape values.
pub mod render;

/// Line and polygon clipping.
pub mod clip;

// ============================================================================
// Output
// ============================================================================

/// RGBA framebuffer.
pub mod framebuffer;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for grid-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use grid_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{liang_barsky, sutherland_hodgman};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::grid::{DevicePoint, GridConfig, GridMapper};
    pub use crate::pixel::{dedup_pixels, Pixel};
    pub use crate::render::{
        bresenham_line, dda_line, midpoint_circle, midpoint_ellipse, midpoint_ellipse_rotated,
        rasterize_line, scanline_fill, wu_line, Circle, Ellipse, GridCanvas, Line, LineAlgorithm,
        Polygon, Rasterize,
    };
    pub use crate::scale::{LinearScale, Scale};
    pub use crate::vec2::Vec2;
}
