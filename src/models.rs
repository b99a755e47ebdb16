// src/models.rs

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Hypothesis and Estimator Selection
// =============================================================================

/// Sidedness of the tested hypothesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hypothesis {
    /// Deviations in either direction count as evidence.
    #[default]
    TwoSided,
    /// Only a shift toward group B counts as evidence.
    OneSided,
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hypothesis::TwoSided => write!(f, "Two-sided"),
            Hypothesis::OneSided => write!(f, "One-sided"),
        }
    }
}

impl FromStr for Hypothesis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two-sided" | "two_sided" | "twosided" => Ok(Hypothesis::TwoSided),
            "one-sided" | "one_sided" | "onesided" => Ok(Hypothesis::OneSided),
            _ => Err(format!(
                "unknown hypothesis '{}' (expected 'two-sided' or 'one-sided')",
                s
            )),
        }
    }
}

/// Which z-score estimator to run.
///
/// `Pooled` is the textbook two-proportion z-test and the default.
/// `Unpooled` combines the per-group standard errors without pooling and
/// is kept for parity with calculators that work that way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZMethod {
    #[default]
    Pooled,
    Unpooled,
}

impl fmt::Display for ZMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZMethod::Pooled => write!(f, "pooled"),
            ZMethod::Unpooled => write!(f, "unpooled"),
        }
    }
}

impl FromStr for ZMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pooled" => Ok(ZMethod::Pooled),
            "unpooled" => Ok(ZMethod::Unpooled),
            _ => Err(format!(
                "unknown z-score method '{}' (expected 'pooled' or 'unpooled')",
                s
            )),
        }
    }
}

// =============================================================================
// Group Observation
// =============================================================================

/// One experiment arm: how many subjects were observed and how many of
/// them produced the event of interest.
///
/// The constructor enforces `population > 0` and `events <= population`,
/// so a held `GroupObservation` is always safe to divide by. Counts are
/// unsigned, which rules out negative inputs at the type level.
///
/// Not deserializable: construction goes through `new`, so serde cannot
/// bypass the invariants.
///
/// # Examples
/// ```
/// use absig::models::GroupObservation;
///
/// let control = GroupObservation::new(23, 228).unwrap();
/// assert_eq!(control.events(), 23);
/// assert!(GroupObservation::new(10, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupObservation {
    events: u64,
    population: u64,
}

impl GroupObservation {
    /// Creates a validated observation.
    pub fn new(events: u64, population: u64) -> Result<Self, EngineError> {
        if population == 0 {
            return Err(EngineError::invalid("population must be positive"));
        }
        if events > population {
            return Err(EngineError::invalid(format!(
                "events ({}) cannot exceed population ({})",
                events, population
            )));
        }
        Ok(Self { events, population })
    }

    /// Number of subjects that produced the event.
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Total number of subjects in the group.
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Conversion rate as a fraction in [0, 1]. The constructor guarantees
    /// a positive population, so this never divides by zero.
    pub fn rate_fraction(&self) -> f64 {
        self.events as f64 / self.population as f64
    }
}

impl fmt::Display for GroupObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.events, self.population)
    }
}

// =============================================================================
// Test Configuration
// =============================================================================

/// Parameters of one significance run.
///
/// Immutable once built; the constructor rejects alpha outside the open
/// interval (0, 1). Front ends conventionally offer [0.01, 0.20], but the
/// engine accepts the full open interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestConfiguration {
    hypothesis: Hypothesis,
    alpha: f64,
    method: ZMethod,
}

impl TestConfiguration {
    /// Creates a configuration with the default (pooled) estimator.
    pub fn new(hypothesis: Hypothesis, alpha: f64) -> Result<Self, EngineError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(EngineError::invalid(format!(
                "alpha must lie strictly between 0 and 1, got {}",
                alpha
            )));
        }
        Ok(Self {
            hypothesis,
            alpha,
            method: ZMethod::default(),
        })
    }

    /// Selects a z-score estimator.
    pub fn with_method(mut self, method: ZMethod) -> Self {
        self.method = method;
        self
    }

    pub fn hypothesis(&self) -> Hypothesis {
        self.hypothesis
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn method(&self) -> ZMethod {
        self.method
    }
}

impl Default for TestConfiguration {
    /// Two-sided, alpha = 0.05, pooled estimator.
    fn default() -> Self {
        Self {
            hypothesis: Hypothesis::TwoSided,
            alpha: 0.05,
            method: ZMethod::Pooled,
        }
    }
}

// =============================================================================
// Significance Result
// =============================================================================

/// Everything the engine computed for one run.
///
/// A plain value: produced fresh per invocation, owned solely by the
/// caller, serializable at full floating-point precision. Rates and the
/// difference are percentages; standard errors are on the fraction scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignificanceResult {
    /// Conversion rate of group A, in percent.
    pub rate_a: f64,
    /// Conversion rate of group B, in percent.
    pub rate_b: f64,
    /// Lift: `rate_b - rate_a`, in percentage points.
    pub difference: f64,
    /// Standard error of group A's proportion estimate.
    pub standard_error_a: f64,
    /// Standard error of group B's proportion estimate.
    pub standard_error_b: f64,
    /// Combined standard error of the difference.
    pub standard_error_diff: f64,
    /// Standardized test statistic.
    pub z_score: f64,
    /// Probability of a difference at least this extreme under the null.
    pub p_value: f64,
    /// Whether `p_value < alpha` (strict).
    pub is_significant: bool,
}

// =============================================================================
// Tests
// =============================================================================
