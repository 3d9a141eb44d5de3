//! Error types for grid-raster operations.
//!
//! The rasterizers and clippers are total and never fail; errors only arise
//! at the edges: grid configuration, framebuffer allocation, color parsing
//! and PNG output.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in grid-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Grid configuration that cannot be mapped to a device.
    #[error("Invalid grid: {cells} cells over {device_size} device units")]
    InvalidGrid {
        /// Number of cells along each axis.
        cells: u32,
        /// Device extent along each axis.
        device_size: f64,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Scale domain error (e.g., zero-width domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
