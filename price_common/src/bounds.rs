//! Validated half-open price interval.
//!
//! A `PriceBounds` is only constructible when rejection sampling over it can
//! terminate: both bounds finite, `lower < upper`, and `upper > 0` so that the
//! raw draw range `[0, upper)` is not empty.
use std::fmt;

use crate::error::PriceError;
use crate::result::Result;

/// Half-open interval `[lower, upper)` that generated prices fall into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    lower: f64,
    upper: f64,
}

impl PriceBounds {
    /// Validate and build a new interval.
    ///
    /// Returns [`PriceError::InvalidBounds`] when `lower >= upper`,
    /// [`PriceError::NonFiniteBound`] for NaN or infinite input and
    /// [`PriceError::EmptySampleRange`] when `upper <= 0`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        for bound in [lower, upper] {
            if !bound.is_finite() {
                return Err(PriceError::NonFiniteBound(bound));
            }
        }
        if lower >= upper {
            return Err(PriceError::InvalidBounds { lower, upper });
        }
        if upper <= 0.0 {
            return Err(PriceError::EmptySampleRange(upper));
        }
        Ok(Self { lower, upper })
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Exclusive upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `true` if `value` lies in `[lower, upper)`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// Probability that a single uniform draw from `[0, upper)` is kept.
    ///
    /// A non-positive lower bound rejects nothing.
    pub fn acceptance_rate(&self) -> f64 {
        (self.upper - self.lower.max(0.0)) / self.upper
    }

    /// Mean number of raw draws needed per accepted value.
    pub fn expected_draws_per_value(&self) -> f64 {
        1.0 / self.acceptance_rate()
    }
}

impl fmt::Display for PriceBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}
