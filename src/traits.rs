// src/traits.rs

use crate::error::EngineError;
use crate::models::GroupObservation;

/// A z-score estimator for the difference between two observed proportions.
///
/// Implementations are stateless. The engine resolves one per run via
/// `ZMethod::strategy()`, and every estimator feeds the same downstream
/// p-value and verdict logic.
pub trait ZScoreStrategy: Send + Sync {
    /// Returns the name of this estimator (for logging and reports).
    fn name(&self) -> &'static str;

    /// Computes the z statistic for group B measured against group A.
    /// Positive z means B converts better.
    fn z_score(
        &self,
        group_a: &GroupObservation,
        group_b: &GroupObservation,
    ) -> Result<f64, EngineError>;
}
