//! Unit newtypes for body measurements
//!
//! Heights and weights are carried as validated newtypes so the body model
//! can only be built from canonical SI values (meters, kilograms). Conversion
//! happens at the boundary, never inside the calculation pipeline.

use serde::Serialize;
use std::fmt;

use crate::errors::{EstimateError, EstimateResult};

/// Pounds per kilogram, used for boundary conversion only. The protein
/// estimator deliberately uses the coarser 2.2 factor instead; see
/// [`crate::protein`].
const KG_PER_LB: f64 = 0.453592;

/// A height in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Meters(f64);

impl Meters {
    /// Construct a height in meters, rejecting non-finite or non-positive
    /// values
    pub fn new(value: f64) -> EstimateResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EstimateError::Validation(format!(
                "Height must be a positive number of meters, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Construct from centimeters
    pub fn from_cm(cm: f64) -> EstimateResult<Self> {
        Self::new(cm / 100.0)
    }

    /// The height in meters
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The height in centimeters
    pub fn to_cm(&self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// A mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kilograms(f64);

impl Kilograms {
    /// Construct a mass in kilograms, rejecting non-finite or non-positive
    /// values
    pub fn new(value: f64) -> EstimateResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EstimateError::Validation(format!(
                "Weight must be a positive number of kilograms, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Construct from pounds
    pub fn from_lbs(lbs: f64) -> EstimateResult<Self> {
        Self::new(lbs * KG_PER_LB)
    }

    /// The mass in kilograms
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The mass in pounds
    pub fn to_lbs(&self) -> f64 {
        self.0 / KG_PER_LB
    }

    /// Scale by a fraction in `[0, 1]`, for derived masses such as lean mass
    pub(crate) fn scaled(&self, fraction: f64) -> Self {
        Self(self.0 * fraction)
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kg", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_meters_construction() {
        assert!(Meters::new(1.72).is_ok());
        assert!(Meters::new(0.0).is_err());
        assert!(Meters::new(-1.0).is_err());
        assert!(Meters::new(f64::NAN).is_err());
    }

    #[test]
    fn test_meters_from_cm() {
        let height = Meters::from_cm(172.0).unwrap();
        assert!((height.value() - 1.72).abs() < 1e-12);
        assert!((height.to_cm() - 172.0).abs() < 1e-9);
    }

    #[test]
    fn test_kilograms_from_lbs() {
        // 100 lbs = 45.3592 kg
        let weight = Kilograms::from_lbs(100.0).unwrap();
        assert!((weight.value() - 45.3592).abs() < 0.001);
    }

    #[test]
    fn test_kilograms_rejects_invalid() {
        assert!(Kilograms::new(0.0).is_err());
        assert!(Kilograms::new(f64::INFINITY).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: pound conversion round-trip preserves value
        #[test]
        fn prop_lbs_roundtrip(kg in 20.0f64..500.0) {
            let weight = Kilograms::new(kg).unwrap();
            let back = Kilograms::from_lbs(weight.to_lbs()).unwrap();
            prop_assert!((back.value() - kg).abs() < 1e-9);
        }

        /// Property: centimeter conversion round-trip preserves value
        #[test]
        fn prop_cm_roundtrip(m in 0.5f64..2.5) {
            let height = Meters::new(m).unwrap();
            let back = Meters::from_cm(height.to_cm()).unwrap();
            prop_assert!((back.value() - m).abs() < 1e-12);
        }
    }
}
