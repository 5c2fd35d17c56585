//! Dietary protein estimation
//!
//! Protein targets scale with lean mass: leaner bodies get more grams of
//! protein per pound of bodyweight. Body-fat percentage is interpolated into
//! a sex-dependent grams-per-pound range, converted to grams-per-kilogram,
//! and multiplied by lean mass.

use serde::Serialize;

use crate::body::{BiologicalSex, BodyDefinition};
use crate::coefficients::map_into_range;

/// Grams of protein per pound of bodyweight at the lean end of the range
const GRAMS_PER_POUND_LEAN: f64 = 1.6;
/// Grams of protein per pound of bodyweight at the fat end of the range
const GRAMS_PER_POUND_FAT: f64 = 1.2;

/// The approximate pounds-per-kilogram factor used for the grams-per-pound
/// to grams-per-kilogram step. Deliberately 2.2 rather than the precise
/// 2.20462; changing it changes published targets.
const LBS_PER_KG_APPROX: f64 = 2.2;

/// An estimate of required dietary protein
///
/// All three fields are masses in grams; `grams_per_kilogram` is always
/// `grams_per_pound * 2.2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietaryProteinEstimate {
    /// Total grams of protein per day, rounded up to a whole gram
    pub protein_grams: f64,
    /// Grams of protein per kilogram of bodyweight
    pub grams_per_kilogram: f64,
    /// Grams of protein per pound of bodyweight
    pub grams_per_pound: f64,
}

impl DietaryProteinEstimate {
    /// Calories contributed by the protein target (4 kcal per gram)
    pub fn protein_calories(&self) -> f64 {
        self.protein_grams * 4.0
    }
}

/// Estimate dietary protein for the given body.
///
/// Body-fat percentages outside the interpolation domain extrapolate linearly
/// past the `[1.2, 1.6]` grams-per-pound range rather than saturating. This
/// mirrors the published behavior of the estimator and is intentional.
pub fn estimate_protein(body: &BodyDefinition) -> DietaryProteinEstimate {
    let grams_per_pound = protein_grams_per_pound(body);
    let grams_per_kilogram = grams_per_pound * LBS_PER_KG_APPROX;

    let lean_mass_kg = body.lean_mass().value();
    let protein_grams = (lean_mass_kg * grams_per_kilogram).ceil();

    tracing::debug!(
        grams_per_pound,
        grams_per_kilogram,
        lean_mass_kg,
        protein_grams,
        "estimated dietary protein"
    );

    DietaryProteinEstimate {
        protein_grams,
        grams_per_kilogram,
        grams_per_pound,
    }
}

fn protein_grams_per_pound(body: &BodyDefinition) -> f64 {
    match body.sex() {
        BiologicalSex::Male => map_into_range(
            5.0,
            30.0,
            GRAMS_PER_POUND_LEAN,
            GRAMS_PER_POUND_FAT,
            body.body_fat_percent(),
        ),
        BiologicalSex::Female => map_into_range(
            8.0,
            40.0,
            GRAMS_PER_POUND_LEAN,
            GRAMS_PER_POUND_FAT,
            body.body_fat_percent(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ActivityLevel;
    use crate::coefficients::BoundedRatio;
    use crate::units::{Kilograms, Meters};
    use rstest::rstest;

    fn body(sex: BiologicalSex, weight: Kilograms, body_fat: f64) -> BodyDefinition {
        BodyDefinition::new(
            sex,
            Meters::new(1.72).unwrap(),
            weight,
            35,
            BoundedRatio::new(body_fat).unwrap(),
            ActivityLevel::ModeratelyActive,
        )
    }

    #[rstest]
    // Domain endpoints map exactly onto the range endpoints
    #[case::male_lower(BiologicalSex::Male, 0.05, 1.6)]
    #[case::male_upper(BiologicalSex::Male, 0.30, 1.2)]
    #[case::female_lower(BiologicalSex::Female, 0.08, 1.6)]
    #[case::female_upper(BiologicalSex::Female, 0.40, 1.2)]
    // Interior points
    #[case::male_mid(BiologicalSex::Male, 0.20, 1.36)]
    #[case::male_athletic(BiologicalSex::Male, 0.10, 1.52)]
    #[case::female_mid(BiologicalSex::Female, 0.25, 1.3875)]
    fn test_grams_per_pound(
        #[case] sex: BiologicalSex,
        #[case] body_fat: f64,
        #[case] expected: f64,
    ) {
        let b = body(sex, Kilograms::new(80.0).unwrap(), body_fat);
        let estimate = estimate_protein(&b);
        assert_eq!(estimate.grams_per_pound, expected);
    }

    #[rstest]
    // Weights given in pounds, matching the reference fixtures
    #[case::bill(BiologicalSex::Male, 240.0, 0.30, 202.0)]
    #[case::junior(BiologicalSex::Male, 150.0, 0.10, 205.0)]
    #[case::sally(BiologicalSex::Female, 135.0, 0.25, 141.0)]
    #[case::helga(BiologicalSex::Female, 200.0, 0.40, 144.0)]
    fn test_total_protein_grams(
        #[case] sex: BiologicalSex,
        #[case] weight_lbs: f64,
        #[case] body_fat: f64,
        #[case] expected_grams: f64,
    ) {
        let b = body(sex, Kilograms::from_lbs(weight_lbs).unwrap(), body_fat);
        let estimate = estimate_protein(&b);
        assert_eq!(estimate.protein_grams, expected_grams);
    }

    #[test]
    fn test_grams_per_kilogram_factor() {
        let b = body(BiologicalSex::Male, Kilograms::new(81.3).unwrap(), 0.20);
        let estimate = estimate_protein(&b);
        assert_eq!(estimate.grams_per_kilogram, estimate.grams_per_pound * 2.2);
    }

    #[test]
    fn test_out_of_domain_extrapolates() {
        // 2% body fat is below the male domain; the estimate goes past 1.6
        let lean = body(BiologicalSex::Male, Kilograms::new(80.0).unwrap(), 0.02);
        assert!(estimate_protein(&lean).grams_per_pound > 1.6);

        // 45% is above the domain; the estimate goes below 1.2
        let fat = body(BiologicalSex::Male, Kilograms::new(80.0).unwrap(), 0.45);
        assert!(estimate_protein(&fat).grams_per_pound < 1.2);
    }

    #[test]
    fn test_protein_calories() {
        let estimate = DietaryProteinEstimate {
            protein_grams: 195.0,
            grams_per_kilogram: 2.992,
            grams_per_pound: 1.36,
        };
        assert_eq!(estimate.protein_calories(), 780.0);
    }
}
