use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};

/// Allowed throughput regression per benchmark category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionThresholds {
    /// Allowed fraction for benchmarks whose name contains `flat_marker`.
    pub flat: f64,
    /// Allowed fraction for benchmarks whose name contains `embedded_marker`.
    pub embedded: f64,
    pub flat_marker: String,
    pub embedded_marker: String,
}

impl Default for RegressionThresholds {
    fn default() -> Self {
        Self {
            flat: 0.10,
            embedded: 0.15,
            flat_marker: ".flat_".to_string(),
            embedded_marker: ".embedded_".to_string(),
        }
    }
}

impl RegressionThresholds {
    /// Reject thresholds that are not finite fractions in `[0, 1]`.
    pub fn validate(&self) -> GateResult<()> {
        for (name, value) in [("flat", self.flat), ("embedded", self.embedded)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GateError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }

    /// Allowed regression fraction for `benchmark`.
    ///
    /// Names matching neither category marker get the larger of the two
    /// thresholds.
    pub fn allowed_for(&self, benchmark: &str) -> f64 {
        if benchmark.contains(&self.flat_marker) {
            self.flat
        } else if benchmark.contains(&self.embedded_marker) {
            self.embedded
        } else {
            self.flat.max(self.embedded)
        }
    }
}

/// The fixed checks applied to every baseline benchmark, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionCheck {
    /// The benchmark has no finite score in the current results.
    MissingResult,
    /// The recorded baseline score is not a positive, finite number.
    InvalidBaseline,
    /// The current score fell below `baseline * (1 - allowed)`.
    Regression,
}

impl RegressionCheck {
    pub fn id(&self) -> &'static str {
        match self {
            RegressionCheck::MissingResult => "missing-benchmark-result",
            RegressionCheck::InvalidBaseline => "invalid-baseline-score",
            RegressionCheck::Regression => "throughput-regression",
        }
    }
}
