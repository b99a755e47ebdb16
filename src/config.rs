// src/config.rs
//
// Configuration file parsing for significance runs.
// Supports TOML config files that specify the two groups and the test
// parameters; any omitted table or key falls back to a default.

use crate::models::{GroupObservation, Hypothesis, TestConfiguration, ZMethod};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// =============================================================================
// Configuration Types
// =============================================================================

/// Root configuration structure.
#[derive(Debug, Deserialize)]
pub struct RunConfig {
    /// Control group counts
    #[serde(default = "default_group_a")]
    pub group_a: GroupConfig,
    /// Treatment group counts
    #[serde(default = "default_group_b")]
    pub group_b: GroupConfig,
    /// Test parameters
    #[serde(default)]
    pub test: TestSection,
}

/// Raw counts for one group.
#[derive(Debug, Deserialize)]
pub struct GroupConfig {
    pub events: u64,
    pub population: u64,
}

/// Test parameters as they appear on disk; validated in `build()`.
#[derive(Debug, Deserialize)]
pub struct TestSection {
    /// "two-sided" or "one-sided"
    #[serde(default = "default_hypothesis")]
    pub hypothesis: String,
    /// Significance threshold, strictly between 0 and 1
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// "pooled" or "unpooled"
    #[serde(default = "default_method")]
    pub method: String,
}

fn default_group_a() -> GroupConfig {
    GroupConfig {
        events: 23,
        population: 228,
    }
}

fn default_group_b() -> GroupConfig {
    GroupConfig {
        events: 30,
        population: 254,
    }
}

fn default_hypothesis() -> String {
    "two-sided".to_string()
}

fn default_alpha() -> f64 {
    0.05
}

fn default_method() -> String {
    "pooled".to_string()
}

impl Default for TestSection {
    fn default() -> Self {
        Self {
            hypothesis: default_hypothesis(),
            alpha: default_alpha(),
            method: default_method(),
        }
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(&path).map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(s: &str) -> Result<Self, String> {
        toml::from_str(s).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Validates the raw values and builds the typed inputs for a run.
    pub fn build(
        &self,
    ) -> Result<(GroupObservation, GroupObservation, TestConfiguration), String> {
        let group_a = GroupObservation::new(self.group_a.events, self.group_a.population)
            .map_err(|e| format!("group_a: {}", e))?;
        let group_b = GroupObservation::new(self.group_b.events, self.group_b.population)
            .map_err(|e| format!("group_b: {}", e))?;

        let hypothesis: Hypothesis = self.test.hypothesis.parse()?;
        let method: ZMethod = self.test.method.parse()?;

        if self.test.alpha < 0.01 || self.test.alpha > 0.20 {
            log::warn!(
                "alpha {} is outside the usual [0.01, 0.20] range",
                self.test.alpha
            );
        }

        let config = TestConfiguration::new(hypothesis, self.test.alpha)
            .map_err(|e| e.to_string())?
            .with_method(method);

        Ok((group_a, group_b, config))
    }
}

// =============================================================================
// Default Configuration
// =============================================================================

/// Returns a default configuration string for documentation.
pub fn default_config_template() -> &'static str {
    r#"# Significance Calculator Configuration
#
# Two observed groups and the test parameters. Any omitted table or key
# falls back to the defaults shown here.

[group_a]
events = 23
population = 228

[group_b]
events = 30
population = 254

[test]
# "two-sided" or "one-sided"
hypothesis = "two-sided"
# Significance threshold, strictly between 0 and 1.
# Values outside [0.01, 0.20] work but draw a warning.
alpha = 0.05
# "pooled" (standard two-proportion z-test) or "unpooled"
method = "pooled"
"#
}

// =============================================================================
// Tests
// =============================================================================
