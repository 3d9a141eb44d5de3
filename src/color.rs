//! Color types.
//!
//! Pixels carry an [`Rgba`] color whose alpha doubles as coverage: Wu's
//! antialiased lines scale it by the fractional weight of each pixel before
//! the pixel is emitted.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque / full coverage).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Scale alpha by a coverage weight in `[0, 1]`.
    ///
    /// Weights outside the range are clamped; the product is truncated.
    #[must_use]
    pub fn with_coverage(self, coverage: f32) -> Self {
        let coverage = coverage.clamp(0.0, 1.0);
        self.with_alpha((f32::from(self.a) * coverage) as u8)
    }

    /// Alpha as a fraction in `[0, 1]`.
    #[must_use]
    pub fn alpha_fraction(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other shape or non-hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        let well_formed =
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#rrggbbaa`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Format as a CSS `rgba()` color with alpha in `[0, 1]`.
    #[must_use]
    pub fn to_css(self) -> String {
        let alpha = f64::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, (alpha * 1000.0).round() / 1000.0)
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_with_coverage() {
        assert_eq!(Rgba::RED.with_coverage(1.0), Rgba::RED);
        assert_eq!(Rgba::RED.with_coverage(0.5).a, 127);
        assert_eq!(Rgba::RED.with_coverage(0.0).a, 0);
        // Clamped
        assert_eq!(Rgba::RED.with_coverage(2.0).a, 255);
        assert_eq!(Rgba::RED.with_coverage(-1.0).a, 0);
        // Coverage multiplies an existing alpha.
        assert_eq!(Rgba::new(0, 0, 0, 100).with_coverage(0.5).a, 50);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#ff8000").unwrap(), Rgba::rgb(255, 128, 0));
        assert_eq!(Rgba::from_hex("#0000ff80").unwrap(), Rgba::new(0, 0, 255, 128));
        assert_eq!(" #ffffff ".parse::<Rgba>().unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["ff8000", "#ff80", "#gg8000", "#ff80001", "", "#ééé"] {
            assert!(
                matches!(Rgba::from_hex(bad), Err(Error::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_from_hex_rejects_signed_channels() {
        // from_str_radix alone would read "+f" as 15.
        for bad in ["#+f+f+f", "#-f0000", "#ff00+f80"] {
            assert!(Rgba::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgba::new(1, 2, 254, 255).to_string(), "#0102feff");
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgba::RED.to_css(), "rgba(255, 0, 0, 1)");
        assert_eq!(Rgba::new(10, 20, 30, 0).to_css(), "rgba(10, 20, 30, 0)");
        assert_eq!(Rgba::new(10, 20, 30, 153).to_css(), "rgba(10, 20, 30, 0.6)");
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(color.to_array(), [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(color.to_array()), color);
    }

    #[test]
    fn test_rgba_default() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
