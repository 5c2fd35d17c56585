//! Macroplan Core Library
//!
//! This crate contains the macronutrient target calculation pipeline:
//! body model, BMR estimation, maintenance-calorie scaling, protein/fat
//! estimation, and the aggregator that partitions a calorie budget into
//! protein, fat, and carbohydrate gram targets.
//!
//! The core is pure: no I/O, no shared state. Adapters (such as the CLI)
//! validate raw input, construct a [`BodyDefinition`], and call
//! [`estimate_macros`].

pub mod bmr;
pub mod body;
pub mod coefficients;
pub mod errors;
pub mod fat;
pub mod messages;
pub mod plan;
pub mod protein;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use bmr::{basal_metabolic_rate, maintenance_calories, MifflinStJeorInput};
pub use body::{ActivityLevel, BiologicalSex, BodyDefinition, CaloricAdjustment};
pub use coefficients::{BoundedRatio, Ratio};
pub use errors::{EstimateError, EstimateResult};
pub use fat::{estimate_fat, DietaryFatEstimate};
pub use messages::{ExplanationMessages, PlainMessages};
pub use plan::{estimate_macros, estimate_macros_with, MacroTargets};
pub use protein::{estimate_protein, DietaryProteinEstimate};
pub use units::{Kilograms, Meters};
