//! Scale functions for logical-to-device mappings.
//!
//! A scale maps a continuous domain onto a continuous range and back. The
//! grid mapper is two linear scales, one per axis, with the y range flipped.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// The range may be reversed (`range.0 > range.1`) to flip an axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain or range is empty or not finite.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if !(domain.0.is_finite() && domain.1.is_finite()) || domain.0 == domain.1 {
            return Err(Error::ScaleDomain(format!(
                "domain [{}, {}] must be finite and non-empty",
                domain.0, domain.1
            )));
        }
        if !(range.0.is_finite() && range.1.is_finite()) || range.0 == range.1 {
            return Err(Error::ScaleDomain(format!(
                "range [{}, {}] must be finite and non-empty",
                range.0, range.1
            )));
        }

        Ok(Self::from_parts(domain, range))
    }

    /// Build a scale from extents already known to be non-empty.
    pub(crate) const fn from_parts(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Range units per domain unit (negative for a flipped axis).
    #[must_use]
    pub fn ratio(&self) -> f64 {
        (self.range_max - self.range_min) / (self.domain_max - self.domain_min)
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}
