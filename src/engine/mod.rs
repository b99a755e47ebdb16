// src/engine/mod.rs

use crate::error::EngineError;
use crate::models::{GroupObservation, Hypothesis, SignificanceResult, TestConfiguration};
use crate::stats::{conversion_rate, lift, norm_sf, standard_error, standard_error_diff};
use log::{debug, info};

/// Converts a z statistic into a p-value under the chosen hypothesis.
///
/// Two-sided doubles the upper-tail mass of |z|. One-sided takes the
/// upper tail for non-negative z and the lower tail otherwise, so a
/// deficit of B over A reports the probability of a deficit that large.
pub fn p_value(z: f64, hypothesis: Hypothesis) -> Result<f64, EngineError> {
    if z.is_nan() {
        return Err(EngineError::invalid("z-score is NaN, no p-value exists"));
    }

    let p = match hypothesis {
        Hypothesis::TwoSided => 2.0 * norm_sf(z.abs()),
        Hypothesis::OneSided => {
            if z >= 0.0 {
                norm_sf(z)
            } else {
                1.0 - norm_sf(z)
            }
        }
    };

    // Doubling the tail can overshoot 1.0 by ~1e-9 near z = 0.
    Ok(p.clamp(0.0, 1.0))
}

/// Verdict rule: significant only when `p_value < alpha`, strictly.
/// A p-value exactly equal to alpha is not significant.
pub fn evaluate_significance(p_value: f64, alpha: f64) -> bool {
    p_value < alpha
}

/// Runs the full significance pipeline for two observed groups.
///
/// Computes per-group rates and standard errors, the lift of B over A,
/// then the configured estimator's z statistic, its p-value, and the
/// verdict. Fails fast on the first undefined quantity; no partial
/// result is ever returned.
pub fn run_significance_test(
    group_a: &GroupObservation,
    group_b: &GroupObservation,
    config: &TestConfiguration,
) -> Result<SignificanceResult, EngineError> {
    let rate_a = conversion_rate(group_a.events(), group_a.population())?;
    let rate_b = conversion_rate(group_b.events(), group_b.population())?;
    let difference = lift(rate_a, rate_b);
    let se_a = standard_error(rate_a, group_a.population())?;
    let se_b = standard_error(rate_b, group_b.population())?;
    let se_diff = standard_error_diff(se_a, se_b);
    debug!(
        "groups: A={} ({:.4}%), B={} ({:.4}%), lift={:.4}pp, sed={:.6e}",
        group_a, rate_a, group_b, rate_b, difference, se_diff
    );

    let estimator = config.method().strategy();
    let z_score = estimator.z_score(group_a, group_b)?;
    let p = p_value(z_score, config.hypothesis())?;
    let is_significant = evaluate_significance(p, config.alpha());

    info!(
        "{} {} test: z={:.4}, p={:.4}, alpha={}, significant={}",
        config.hypothesis(),
        estimator.name(),
        z_score,
        p,
        config.alpha(),
        is_significant
    );

    Ok(SignificanceResult {
        rate_a,
        rate_b,
        difference,
        standard_error_a: se_a,
        standard_error_b: se_b,
        standard_error_diff: se_diff,
        z_score,
        p_value: p,
        is_significant,
    })
}
