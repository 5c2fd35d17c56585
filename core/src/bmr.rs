//! Basal metabolic rate estimation
//!
//! Implements the Mifflin-St Jeor equation and the maintenance-calorie
//! scaling step. Both are pure functions over validated inputs.
//!
//! Men:   BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
//! Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161

use serde::Serialize;

use crate::body::{ActivityLevel, BiologicalSex, BodyDefinition};
use crate::units::{Kilograms, Meters};

/// The minimal subset of a body needed for BMR estimation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MifflinStJeorInput {
    pub height: Meters,
    pub weight: Kilograms,
    pub age_years: i32,
    pub sex: BiologicalSex,
}

impl From<&BodyDefinition> for MifflinStJeorInput {
    fn from(body: &BodyDefinition) -> Self {
        Self {
            height: body.height(),
            weight: body.weight(),
            age_years: body.age_years(),
            sex: body.sex(),
        }
    }
}

/// Calculate basal metabolic rate in kilocalories per day.
///
/// Height is stored in meters and converted to centimeters here, as the
/// equation requires.
pub fn basal_metabolic_rate(input: &MifflinStJeorInput) -> f64 {
    let weight_term = input.weight.value() * 10.0;
    let height_term = input.height.to_cm() * 6.25;
    let age_term = f64::from(input.age_years) * 5.0;
    let sex_term = match input.sex {
        BiologicalSex::Male => 5.0,
        BiologicalSex::Female => -161.0,
    };
    ((weight_term + height_term) - age_term) + sex_term
}

/// Scale BMR by the activity multiplier to estimate maintenance calories
pub fn maintenance_calories(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}
