//! Explanation message formatting
//!
//! The aggregator narrates each step of the calculation. Rendering goes
//! through the [`ExplanationMessages`] trait so adapters can swap in their
//! own wording or localization; the computed numbers never depend on the
//! formatting implementation.

use crate::bmr::MifflinStJeorInput;
use crate::body::{ActivityLevel, CaloricAdjustment};
use crate::protein::DietaryProteinEstimate;

/// Formatting capability for the aggregator's explanation trail
pub trait ExplanationMessages {
    /// Describe the BMR inputs and result
    fn explain_bmr(&self, input: &MifflinStJeorInput, bmr: f64) -> String;

    /// Describe the maintenance-calorie scaling step
    fn explain_maintenance(&self, activity: ActivityLevel, calories: f64) -> String;

    /// Describe the caloric-adjustment step
    fn explain_adjustment(&self, adjustment_name: &str, calories: f64) -> String;

    /// Name a recognized caloric adjustment level
    fn adjustment_named(&self, level: CaloricAdjustment) -> String;

    /// Describe an unnamed surplus multiplier as a percentage
    fn adjustment_surplus(&self, percent: f64) -> String;

    /// Describe an unnamed deficit multiplier as a percentage
    fn adjustment_deficit(&self, percent: f64) -> String;

    /// Describe an unnamed maintenance multiplier
    fn adjustment_maintain(&self, percent: f64) -> String;

    /// Describe the full macro breakdown
    #[allow(clippy::too_many_arguments)]
    fn explain_macros(
        &self,
        target_calories: f64,
        protein: &DietaryProteinEstimate,
        fat_calories: f64,
        fat_grams: f64,
        carbohydrate_calories: f64,
        carbohydrate_grams: f64,
    ) -> String;

    /// One-line summary of the final targets
    fn explain_summary(
        &self,
        target_calories: f64,
        protein_grams: f64,
        fat_grams: f64,
        carbohydrate_grams: f64,
    ) -> String;
}

/// Default English explanation wording
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMessages;

impl ExplanationMessages for PlainMessages {
    fn explain_bmr(&self, input: &MifflinStJeorInput, bmr: f64) -> String {
        format!(
            "A {} year old {} with a height of {} and a weight of {}kg has an \
             estimated basal metabolic rate of {} kcal (Mifflin-St Jeor).",
            input.age_years,
            input.sex,
            input.height,
            input.weight.value() as i64,
            bmr as i64
        )
    }

    fn explain_maintenance(&self, activity: ActivityLevel, calories: f64) -> String {
        format!(
            "A {} activity level (x{}) gives an estimated maintenance \
             requirement of {} kcal.",
            activity.description(),
            activity.multiplier(),
            calories as i64
        )
    }

    fn explain_adjustment(&self, adjustment_name: &str, calories: f64) -> String {
        format!(
            "Applying a {} adjustment gives a target of {} kcal.",
            adjustment_name, calories as i64
        )
    }

    fn adjustment_named(&self, level: CaloricAdjustment) -> String {
        level.description().to_string()
    }

    fn adjustment_surplus(&self, percent: f64) -> String {
        format!("surplus ({percent:.0}% of maintenance)")
    }

    fn adjustment_deficit(&self, percent: f64) -> String {
        format!("deficit ({percent:.0}% of maintenance)")
    }

    fn adjustment_maintain(&self, percent: f64) -> String {
        format!("maintenance ({percent:.0}% of maintenance)")
    }

    fn explain_macros(
        &self,
        target_calories: f64,
        protein: &DietaryProteinEstimate,
        fat_calories: f64,
        fat_grams: f64,
        carbohydrate_calories: f64,
        carbohydrate_grams: f64,
    ) -> String {
        format!(
            "Of the {} kcal target: protein at {:.2} g/kg supplies {} kcal \
             ({} g), fat supplies {} kcal ({} g), and carbohydrates supply \
             the remaining {} kcal ({} g).",
            target_calories as i64,
            protein.grams_per_kilogram,
            protein.protein_calories() as i64,
            protein.protein_grams as i64,
            fat_calories as i64,
            fat_grams as i64,
            carbohydrate_calories as i64,
            carbohydrate_grams as i64
        )
    }

    fn explain_summary(
        &self,
        target_calories: f64,
        protein_grams: f64,
        fat_grams: f64,
        carbohydrate_grams: f64,
    ) -> String {
        format!(
            "Daily targets: {} kcal, {} g protein, {} g fat, {} g carbohydrates.",
            target_calories as i64,
            protein_grams as i64,
            fat_grams as i64,
            carbohydrate_grams as i64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BiologicalSex;
    use crate::units::{Kilograms, Meters};

    #[test]
    fn test_bmr_explanation_mentions_inputs() {
        let input = MifflinStJeorInput {
            height: Meters::new(1.72).unwrap(),
            weight: Kilograms::new(81.3).unwrap(),
            age_years: 35,
            sex: BiologicalSex::Male,
        };
        let text = PlainMessages.explain_bmr(&input, 1718.0);
        assert!(text.contains("35 year old male"));
        assert!(text.contains("1718 kcal"));
    }

    #[test]
    fn test_adjustment_classifications() {
        assert!(PlainMessages.adjustment_surplus(115.0).contains("surplus"));
        assert!(PlainMessages.adjustment_deficit(85.0).contains("deficit"));
        assert!(PlainMessages.adjustment_maintain(100.0).contains("maintenance"));
        assert_eq!(
            PlainMessages.adjustment_named(CaloricAdjustment::SmallDeficit),
            "small deficit"
        );
    }
}
