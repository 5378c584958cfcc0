use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::baseline::score_value;
use crate::error::{read_required, GateError, GateResult};

/// Current benchmark scores keyed by benchmark name.
///
/// Only finite scores are kept; anything else is indistinguishable from a
/// benchmark that did not run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentResults {
    scores: HashMap<String, f64>,
    /// Entries dropped for lacking a name or score, or for a non-finite score.
    pub skipped: usize,
}

impl CurrentResults {
    pub fn from_scores(scores: impl IntoIterator<Item = (String, f64)>) -> Self {
        let scores = scores.into_iter().filter(|(_, score)| score.is_finite()).collect();
        Self { scores, skipped: 0 }
    }

    pub fn get(&self, benchmark: &str) -> Option<f64> {
        self.scores.get(benchmark).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Load JMH-style results (`[{"benchmark": ..., "primaryMetric": {"score": ...}}]`).
pub fn load_current_results(path: &Path) -> GateResult<CurrentResults> {
    let body = read_required(path)?;
    parse_current_results(path, &body)
}

/// Parse a results body; `path` is only used for error messages.
pub fn parse_current_results(path: &Path, body: &str) -> GateResult<CurrentResults> {
    let raw: Value = serde_json::from_str(body)
        .map_err(|source| GateError::Json { path: path.to_path_buf(), source })?;
    let Value::Array(entries) = raw else {
        return Err(GateError::MalformedResults {
            path: path.to_path_buf(),
            reason: "current results must be a JSON array".to_string(),
        });
    };

    let mut results = CurrentResults::default();
    for entry in &entries {
        let benchmark = entry.get("benchmark").and_then(Value::as_str);
        let score = entry.get("primaryMetric").and_then(|metric| metric.get("score"));
        let (Some(benchmark), Some(score)) = (benchmark, score.filter(|s| !s.is_null())) else {
            results.skipped += 1;
            continue;
        };
        let value = score_value(score).ok_or_else(|| GateError::MalformedResults {
            path: path.to_path_buf(),
            reason: format!("score for '{benchmark}' is not a number: {score}"),
        })?;
        if !value.is_finite() {
            debug!(benchmark, value, "non-finite score treated as missing");
            results.skipped += 1;
            continue;
        }
        results.scores.insert(benchmark.to_string(), value);
    }
    Ok(results)
}
