//! Coefficient primitives
//!
//! Two ratio types underpin the body model: [`BoundedRatio`] for values that
//! must lie in `[0, 1]` (body-fat fraction, fat-calorie fraction) and
//! [`Ratio`] for unrestricted positive multipliers (activity level, caloric
//! adjustment). Both validate at construction so downstream code never
//! re-checks ranges.

use serde::Serialize;

use crate::errors::{EstimateError, EstimateResult};

/// A ratio constrained to the range `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundedRatio(f64);

impl BoundedRatio {
    /// Construct a bounded ratio, rejecting values outside `[0, 1]`
    pub fn new(value: f64) -> EstimateResult<Self> {
        if !value.is_finite() {
            return Err(EstimateError::Validation(format!(
                "Ratio must be a finite number, got {value}"
            )));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(EstimateError::Validation(format!(
                "Ratio must be in the range [0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// The raw coefficient value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The coefficient expressed as a percentage
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// The complement `1 - value`, e.g. lean-mass fraction from body-fat
    /// fraction
    pub fn complement(&self) -> Self {
        Self(1.0 - self.0)
    }

    /// Construct from a value already clamped into `[0, 1]` by the caller
    pub(crate) fn new_clamped(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }
}

/// An unrestricted positive multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratio(f64);

impl Ratio {
    /// Construct a ratio, rejecting non-finite or non-positive values
    pub fn new(value: f64) -> EstimateResult<Self> {
        if !value.is_finite() {
            return Err(EstimateError::Validation(format!(
                "Multiplier must be a finite number, got {value}"
            )));
        }
        if value <= 0.0 {
            return Err(EstimateError::Validation(format!(
                "Multiplier must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// The raw multiplier value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The multiplier expressed as a percentage
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Construct from a fixed table constant known to be valid
    pub(crate) const fn from_const(value: f64) -> Self {
        Self(value)
    }
}

/// Map `x` from the input domain `[input_low, input_high]` onto the output
/// range `[output_low, output_high]` by linear interpolation.
///
/// Values outside the input domain extrapolate; callers that need saturation
/// clamp the result themselves.
pub(crate) fn map_into_range(
    input_low: f64,
    input_high: f64,
    output_low: f64,
    output_high: f64,
    x: f64,
) -> f64 {
    let output_span = output_high - output_low;
    let input_span = input_high - input_low;
    output_low + (output_span / input_span) * (x - input_low)
}
