// src/strategy/pooled.rs

use crate::error::EngineError;
use crate::models::GroupObservation;
use crate::traits::ZScoreStrategy;
use log::debug;

/// Pooled two-proportion z-test, the standard estimator.
///
/// Pools both groups into a single conversion rate to estimate the
/// variance under the null hypothesis that A and B share one true rate:
///
/// `z = (p_b - p_a) / sqrt(p̄ (1 - p̄) (1/n_a + 1/n_b))`
pub struct PooledZ;

impl ZScoreStrategy for PooledZ {
    fn name(&self) -> &'static str {
        "pooled"
    }

    fn z_score(
        &self,
        group_a: &GroupObservation,
        group_b: &GroupObservation,
    ) -> Result<f64, EngineError> {
        let n_a = group_a.population() as f64;
        let n_b = group_b.population() as f64;
        let pooled = (group_a.events() as f64 + group_b.events() as f64) / (n_a + n_b);

        // A pooled rate of exactly 0 or 1 means every subject behaved the
        // same in both groups; the null variance is zero and z is undefined.
        if pooled == 0.0 || pooled == 1.0 {
            return Err(EngineError::degenerate(format!(
                "pooled conversion rate is {}%, variance is zero",
                pooled * 100.0
            )));
        }

        let variance = pooled * (1.0 - pooled) * (1.0 / n_a + 1.0 / n_b);
        let z = (group_b.rate_fraction() - group_a.rate_fraction()) / variance.sqrt();
        debug!(
            "pooled z: p̄={:.6}, var={:.6e}, z={:.6}",
            pooled, variance, z
        );
        Ok(z)
    }
}
