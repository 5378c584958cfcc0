use std::path::Path;

use serde_json::Value;

use crate::error::{read_required, GateError, GateResult};

/// Recorded benchmark scores, in the order the baseline file lists them.
///
/// That order is the order regression findings are reported in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkBaseline {
    entries: Vec<(String, f64)>,
}

impl BenchmarkBaseline {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self { entries: entries.into_iter().collect() }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a baseline JSON object (`{"benchmark": score, ...}`) from disk.
pub fn load_benchmark_baseline(path: &Path) -> GateResult<BenchmarkBaseline> {
    let body = read_required(path)?;
    parse_benchmark_baseline(path, &body)
}

/// Parse a baseline body; `path` is only used for error messages.
pub fn parse_benchmark_baseline(path: &Path, body: &str) -> GateResult<BenchmarkBaseline> {
    let raw: Value = serde_json::from_str(body)
        .map_err(|source| GateError::Json { path: path.to_path_buf(), source })?;
    let Value::Object(map) = raw else {
        return Err(GateError::MalformedBaseline {
            path: path.to_path_buf(),
            reason: "baseline must be a JSON object {benchmark: score}".to_string(),
        });
    };

    let mut entries = Vec::with_capacity(map.len());
    for (name, value) in map {
        let score = score_value(&value).ok_or_else(|| GateError::MalformedBaseline {
            path: path.to_path_buf(),
            reason: format!("score for '{name}' is not a number: {value}"),
        })?;
        entries.push((name, score));
    }
    Ok(BenchmarkBaseline { entries })
}

/// Interpret a JSON value as a score: numbers, or strings holding a number
/// (JMH writes non-finite values as `"NaN"` / `"Infinity"`).
pub(crate) fn score_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
