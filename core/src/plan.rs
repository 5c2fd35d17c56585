//! Macro aggregation
//!
//! [`estimate_macros`] runs the full pipeline for a body: BMR, maintenance
//! calories, caloric adjustment, protein, fat, and the carbohydrate
//! remainder, collecting a human-readable explanation for each step.
//! [`MacroTargets`] enforces the energy-balance invariant at construction:
//! the calories implied by the three gram targets must sum (after ceiling)
//! to the calorie target itself.

use serde::Serialize;

use crate::bmr::{basal_metabolic_rate, maintenance_calories, MifflinStJeorInput};
use crate::body::{BodyDefinition, CaloricAdjustment};
use crate::coefficients::Ratio;
use crate::errors::{EstimateError, EstimateResult};
use crate::fat::estimate_fat;
use crate::messages::{ExplanationMessages, PlainMessages};
use crate::protein::estimate_protein;

/// Macronutrient targets for a body, with the reasons for the values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroTargets {
    /// Ordered explanations for the calculated values
    pub explanations: Vec<String>,
    /// The daily calorie target
    pub calories: f64,
    /// Grams of protein per day
    pub protein_grams: f64,
    /// Grams of fat per day
    pub fat_grams: f64,
    /// Grams of carbohydrates per day
    pub carbohydrate_grams: f64,
}

impl MacroTargets {
    /// Construct a result record, enforcing the closure invariant.
    ///
    /// A failure here means the aggregator arithmetic is wrong; it is never
    /// caused by user input.
    pub fn new(
        explanations: Vec<String>,
        calories: f64,
        protein_grams: f64,
        fat_grams: f64,
        carbohydrate_grams: f64,
    ) -> EstimateResult<Self> {
        let targets = Self {
            explanations,
            calories,
            protein_grams,
            fat_grams,
            carbohydrate_grams,
        };

        let macro_calories = (targets.protein_calories()
            + targets.carbohydrate_calories()
            + targets.fat_calories())
        .ceil();
        let expected = targets.calories.ceil();

        if macro_calories != expected {
            return Err(EstimateError::Internal(format!(
                "Macronutrient calories must sum to {expected}, got {macro_calories}"
            )));
        }

        Ok(targets)
    }

    /// Calories contributed by protein (4 kcal per gram)
    pub fn protein_calories(&self) -> f64 {
        self.protein_grams * 4.0
    }

    /// Calories contributed by fat (9 kcal per gram)
    pub fn fat_calories(&self) -> f64 {
        self.fat_grams * 9.0
    }

    /// Calories contributed by carbohydrates (4 kcal per gram)
    pub fn carbohydrate_calories(&self) -> f64 {
        self.carbohydrate_grams * 4.0
    }
}

/// Estimate macronutrient targets with the default explanation wording
pub fn estimate_macros(body: &BodyDefinition) -> EstimateResult<MacroTargets> {
    estimate_macros_with(body, &PlainMessages)
}

/// Estimate macronutrient targets for the given body.
///
/// The carbohydrate budget is whatever the target leaves after protein and
/// fat; for extreme inputs it can go negative, which is surfaced as-is
/// rather than papered over.
pub fn estimate_macros_with(
    body: &BodyDefinition,
    messages: &impl ExplanationMessages,
) -> EstimateResult<MacroTargets> {
    let mut explanations = Vec::new();

    let bmr_input = MifflinStJeorInput::from(body);
    let bmr = basal_metabolic_rate(&bmr_input);
    explanations.push(messages.explain_bmr(&bmr_input, bmr));

    let maintenance = maintenance_calories(bmr, body.activity());
    explanations.push(messages.explain_maintenance(body.activity(), maintenance));

    let adjustment = body.caloric_adjustment();
    let target_calories = maintenance * adjustment.value();
    explanations.push(messages.explain_adjustment(
        &caloric_adjustment_name(messages, adjustment),
        target_calories,
    ));

    let protein = estimate_protein(body);
    let protein_calories = protein.protein_calories();

    let fat = estimate_fat(body);
    let fat_calories = target_calories * fat.fat_calorie_fraction.value();
    let fat_grams = fat_calories / 9.0;

    let carbohydrate_calories = target_calories - (protein_calories + fat_calories);
    let carbohydrate_grams = carbohydrate_calories / 4.0;

    explanations.push(messages.explain_macros(
        target_calories,
        &protein,
        fat_calories,
        fat_grams,
        carbohydrate_calories,
        carbohydrate_grams,
    ));
    explanations.push(messages.explain_summary(
        target_calories,
        protein.protein_grams,
        fat_grams,
        carbohydrate_grams,
    ));

    tracing::debug!(
        bmr,
        maintenance,
        target_calories,
        protein_grams = protein.protein_grams,
        fat_grams,
        carbohydrate_grams,
        "estimated macro targets"
    );

    MacroTargets::new(
        explanations,
        target_calories,
        protein.protein_grams,
        fat_grams,
        carbohydrate_grams,
    )
}

/// Name the adjustment for explanation text: a named level when the
/// multiplier matches one exactly, otherwise a generic classification
fn caloric_adjustment_name(messages: &impl ExplanationMessages, adjustment: Ratio) -> String {
    if let Some(level) = CaloricAdjustment::from_ratio(adjustment) {
        return messages.adjustment_named(level);
    }

    let percent = adjustment.percent();
    if percent > 100.0 {
        messages.adjustment_surplus(percent)
    } else if percent < 100.0 {
        messages.adjustment_deficit(percent)
    } else {
        messages.adjustment_maintain(percent)
    }
}
