//! Error types for the macro estimation pipeline

use thiserror::Error;

/// Errors produced while constructing inputs or computing targets
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// Input rejected at construction time; recoverable by supplying
    /// corrected input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Arithmetic invariant violated inside the pipeline. This is a defect
    /// in the calculation, not a user input error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for the estimation pipeline
pub type EstimateResult<T> = Result<T, EstimateError>;
