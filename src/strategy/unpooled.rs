// src/strategy/unpooled.rs

use crate::error::EngineError;
use crate::models::GroupObservation;
use crate::stats::{conversion_rate, standard_error, standard_error_diff};
use crate::traits::ZScoreStrategy;
use log::debug;

/// Unpooled z estimator.
///
/// Keeps each group's own variance instead of pooling, dividing the lift
/// by the combined per-group standard error. Slightly anti-conservative
/// near the null compared to [`PooledZ`](crate::strategy::PooledZ), so it
/// can call a borderline result significant where the pooled test does not.
pub struct UnpooledZ;

impl ZScoreStrategy for UnpooledZ {
    fn name(&self) -> &'static str {
        "unpooled"
    }

    fn z_score(
        &self,
        group_a: &GroupObservation,
        group_b: &GroupObservation,
    ) -> Result<f64, EngineError> {
        let rate_a = conversion_rate(group_a.events(), group_a.population())?;
        let rate_b = conversion_rate(group_b.events(), group_b.population())?;
        let se_a = standard_error(rate_a, group_a.population())?;
        let se_b = standard_error(rate_b, group_b.population())?;
        let sed = standard_error_diff(se_a, se_b);

        // Both groups sitting at an extreme rate (0% or 100%) zero out
        // every per-group variance term.
        if sed == 0.0 {
            return Err(EngineError::degenerate(
                "combined standard error is zero, z is undefined",
            ));
        }

        // The lift is in percentage points while the standard error is on
        // the fraction scale; the final /100 reconciles the two.
        let z = ((rate_b - rate_a) / sed) / 100.0;
        debug!("unpooled z: sed={:.6e}, z={:.6}", sed, z);
        Ok(z)
    }
}
