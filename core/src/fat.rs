//! Dietary fat estimation
//!
//! Fat is allocated as a fraction of the calorie target rather than by
//! bodyweight: fatter bodies get a larger share of their calories from
//! dietary fat. Body-fat percentage is interpolated into a sex-dependent
//! fraction range and saturated at the range bounds.

use serde::Serialize;

use crate::body::{BiologicalSex, BodyDefinition};
use crate::coefficients::{map_into_range, BoundedRatio};

/// Smallest fraction of the calorie target allocated to dietary fat
const FAT_FRACTION_LOW: f64 = 0.20;
/// Largest fraction of the calorie target allocated to dietary fat
const FAT_FRACTION_HIGH: f64 = 0.35;

/// An estimate of the fraction of total calories to allocate to dietary fat
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietaryFatEstimate {
    /// Fraction of the calorie target to take as fat, in `[0.20, 0.35]`
    pub fat_calorie_fraction: BoundedRatio,
}

/// Estimate the dietary fat fraction for the given body.
///
/// Unlike the protein estimator, the result saturates: interpolation past
/// the domain is clamped into `[0.20, 0.35]`, so a very lean male still
/// gets 20% of calories as fat and a very fat body never exceeds 35%.
pub fn estimate_fat(body: &BodyDefinition) -> DietaryFatEstimate {
    let raw = match body.sex() {
        BiologicalSex::Male => map_into_range(
            5.0,
            25.0,
            FAT_FRACTION_LOW,
            FAT_FRACTION_HIGH,
            body.body_fat_percent(),
        ),
        BiologicalSex::Female => map_into_range(
            10.0,
            40.0,
            FAT_FRACTION_LOW,
            FAT_FRACTION_HIGH,
            body.body_fat_percent(),
        ),
    };

    let fraction = raw.clamp(FAT_FRACTION_LOW, FAT_FRACTION_HIGH);

    tracing::debug!(
        raw,
        fraction,
        body_fat_percent = body.body_fat_percent(),
        "estimated dietary fat fraction"
    );

    DietaryFatEstimate {
        fat_calorie_fraction: BoundedRatio::new_clamped(fraction),
    }
}
