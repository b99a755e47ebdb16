// src/stats/proportion.rs
//
// Proportion arithmetic shared by every estimator. Rates travel as
// percentages (the scale reports use); standard errors stay on the
// fraction scale, exactly as the classic conversion-rate formulas do.

use crate::error::EngineError;

/// Conversion rate in percent: `(events / population) * 100`.
pub fn conversion_rate(events: u64, population: u64) -> Result<f64, EngineError> {
    if population == 0 {
        return Err(EngineError::DivisionByZero {
            context: "conversion_rate",
        });
    }
    Ok((events as f64 / population as f64) * 100.0)
}

/// Lift of B over A in percentage points. Negative when B trails A.
pub fn lift(rate_a: f64, rate_b: f64) -> f64 {
    rate_b - rate_a
}

/// Standard error of a proportion estimate: `sqrt(p * (1 - p) / n)`,
/// where `p` is the rate converted back to a fraction.
///
/// Zero when the rate is exactly 0% or 100%; callers that cannot
/// tolerate a collapsed variance must check for that themselves.
pub fn standard_error(rate_percent: f64, sample_size: u64) -> Result<f64, EngineError> {
    if sample_size == 0 {
        return Err(EngineError::DivisionByZero {
            context: "standard_error",
        });
    }
    let p = rate_percent / 100.0;
    Ok((p * (1.0 - p) / sample_size as f64).sqrt())
}

/// Standard error of the difference of two independent estimates:
/// `sqrt(se_a² + se_b²)`.
pub fn standard_error_diff(se_a: f64, se_b: f64) -> f64 {
    (se_a.powi(2) + se_b.powi(2)).sqrt()
}
