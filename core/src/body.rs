//! The body model
//!
//! [`BodyDefinition`] is the single input record for the whole pipeline: an
//! immutable description of a person built once from validated values and
//! consumed by every downstream estimator.

use serde::Serialize;
use std::fmt;

use crate::coefficients::{BoundedRatio, Ratio};
use crate::units::{Kilograms, Meters};

/// Biological sex, used as a discriminator in the BMR and protein formulas
///
/// Only the two variants appearing in the underlying formulas are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiologicalSex::Male => write!(f, "male"),
            BiologicalSex::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {s}")),
        }
    }
}

/// A non-exercise activity level with its fixed TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, very little activity outside of lifting
    #[default]
    Sedentary,
    /// Desk job plus daily walks in addition to lifting
    LightlyActive,
    /// Work on your feet, occasional sport in addition to lifting
    ModeratelyActive,
    /// Physical job, regular hiking in addition to lifting
    HighlyActive,
}

impl ActivityLevel {
    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.35,
            ActivityLevel::LightlyActive => 1.65,
            ActivityLevel::ModeratelyActive => 1.9,
            ActivityLevel::HighlyActive => 2.1,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::HighlyActive => "highly active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "highly_active" => Ok(ActivityLevel::HighlyActive),
            _ => Err(format!("Unknown activity level: {s}")),
        }
    }
}

/// A named caloric adjustment with its fixed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaloricAdjustment {
    /// A large deficit, for severe weight reduction
    LargeDeficit,
    /// A small deficit, for weight reduction
    SmallDeficit,
    /// Maintenance level
    Maintenance,
    /// A small surplus, for weight increases
    SmallSurplus,
    /// A large surplus, for severe weight increases
    LargeSurplus,
}

impl CaloricAdjustment {
    /// All named adjustments, in deficit-to-surplus order
    pub const ALL: [CaloricAdjustment; 5] = [
        CaloricAdjustment::LargeDeficit,
        CaloricAdjustment::SmallDeficit,
        CaloricAdjustment::Maintenance,
        CaloricAdjustment::SmallSurplus,
        CaloricAdjustment::LargeSurplus,
    ];

    /// Get the caloric adjustment multiplier
    pub fn ratio(&self) -> Ratio {
        match self {
            CaloricAdjustment::LargeDeficit => Ratio::from_const(0.8),
            CaloricAdjustment::SmallDeficit => Ratio::from_const(0.9),
            CaloricAdjustment::Maintenance => Ratio::from_const(1.0),
            CaloricAdjustment::SmallSurplus => Ratio::from_const(1.1),
            CaloricAdjustment::LargeSurplus => Ratio::from_const(1.2),
        }
    }

    /// Find the named adjustment matching a raw multiplier, if any.
    ///
    /// Matching uses exact float equality over the fixed table; a ratio that
    /// matches no named level is described generically by the aggregator.
    pub fn from_ratio(ratio: Ratio) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.ratio() == ratio)
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            CaloricAdjustment::LargeDeficit => "large deficit",
            CaloricAdjustment::SmallDeficit => "small deficit",
            CaloricAdjustment::Maintenance => "maintenance",
            CaloricAdjustment::SmallSurplus => "small surplus",
            CaloricAdjustment::LargeSurplus => "large surplus",
        }
    }
}

impl fmt::Display for CaloricAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for CaloricAdjustment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "large_deficit" => Ok(CaloricAdjustment::LargeDeficit),
            "small_deficit" => Ok(CaloricAdjustment::SmallDeficit),
            "maintenance" => Ok(CaloricAdjustment::Maintenance),
            "small_surplus" => Ok(CaloricAdjustment::SmallSurplus),
            "large_surplus" => Ok(CaloricAdjustment::LargeSurplus),
            _ => Err(format!("Unknown caloric adjustment: {s}")),
        }
    }
}

/// An immutable description of a person
///
/// Height and weight are carried as unit newtypes and the body-fat fraction
/// as a [`BoundedRatio`], so an invalid body cannot be constructed. Derived
/// quantities (lean mass, fat mass, percentages) are computed on demand and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyDefinition {
    sex: BiologicalSex,
    height: Meters,
    weight: Kilograms,
    age_years: i32,
    body_fat: BoundedRatio,
    activity: ActivityLevel,
    caloric_adjustment: Ratio,
}

impl BodyDefinition {
    /// Construct a body with the default maintenance caloric adjustment
    pub fn new(
        sex: BiologicalSex,
        height: Meters,
        weight: Kilograms,
        age_years: i32,
        body_fat: BoundedRatio,
        activity: ActivityLevel,
    ) -> Self {
        Self {
            sex,
            height,
            weight,
            age_years,
            body_fat,
            activity,
            caloric_adjustment: CaloricAdjustment::Maintenance.ratio(),
        }
    }

    /// Replace the caloric adjustment multiplier
    pub fn with_caloric_adjustment(mut self, adjustment: Ratio) -> Self {
        self.caloric_adjustment = adjustment;
        self
    }

    pub fn sex(&self) -> BiologicalSex {
        self.sex
    }

    pub fn height(&self) -> Meters {
        self.height
    }

    pub fn weight(&self) -> Kilograms {
        self.weight
    }

    pub fn age_years(&self) -> i32 {
        self.age_years
    }

    pub fn body_fat(&self) -> BoundedRatio {
        self.body_fat
    }

    pub fn activity(&self) -> ActivityLevel {
        self.activity
    }

    pub fn caloric_adjustment(&self) -> Ratio {
        self.caloric_adjustment
    }

    /// Body fat expressed as a percentage
    pub fn body_fat_percent(&self) -> f64 {
        self.body_fat.percent()
    }

    /// The lean-mass fraction, `1 - body fat fraction`
    pub fn lean_mass_fraction(&self) -> BoundedRatio {
        self.body_fat.complement()
    }

    /// Lean mass expressed as a percentage of body weight
    pub fn lean_mass_percent(&self) -> f64 {
        self.lean_mass_fraction().percent()
    }

    /// The mass of body fat
    pub fn fat_mass(&self) -> Kilograms {
        self.weight.scaled(self.body_fat.value())
    }

    /// The lean (fat-free) mass
    pub fn lean_mass(&self) -> Kilograms {
        self.weight.scaled(self.lean_mass_fraction().value())
    }
}
