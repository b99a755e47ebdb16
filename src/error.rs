// src/error.rs
//
// Typed failure taxonomy for the significance engine.
// Every failure surfaces as an explicit Err; the engine never lets a NaN
// or infinity escape into a result, and never substitutes a sentinel value.

use thiserror::Error;

/// Errors produced by the significance engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input rejected before any arithmetic ran (zero population,
    /// events exceeding population, alpha outside (0, 1), NaN z-score).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A required denominator evaluated to zero despite validation.
    #[error("division by zero in {context}")]
    DivisionByZero { context: &'static str },

    /// Statistically meaningless configuration: the variance term
    /// collapsed to zero (both groups at identical 0% or 100% rates),
    /// so no finite z-score exists.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
}

impl EngineError {
    /// Shorthand for an InvalidInput with a formatted reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for a DegenerateInput with a formatted reason.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        EngineError::DegenerateInput {
            reason: reason.into(),
        }
    }
}
