//! Core data model shared by every gate: findings, verdicts and exit status.
//!
//! Everything here is plain data created fresh per gate run. Findings keep the
//! order in which the evaluator produced them so reports are reproducible.

use serde::{Deserialize, Serialize};

/// Which gate produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    DocsDrift,
    BenchRegression,
}

impl GateKind {
    /// Human-readable title used in report headers.
    pub fn title(&self) -> &'static str {
        match self {
            GateKind::DocsDrift => "Docs drift check",
            GateKind::BenchRegression => "Benchmark regression check",
        }
    }

    /// Noun used in the pass summary ("12 files checked").
    pub fn target_noun(&self) -> &'static str {
        match self {
            GateKind::DocsDrift => "files",
            GateKind::BenchRegression => "benchmarks",
        }
    }
}

/// Numbers behind a throughput regression, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionDetail {
    pub baseline: f64,
    pub current: f64,
    /// Observed regression as a fraction of the baseline score.
    pub regression: f64,
    /// Allowed regression fraction for the benchmark's category.
    pub allowed: f64,
}

/// One concrete policy violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// `path:line` for documentation, the benchmark name for benchmarks.
    pub location: String,
    pub rule_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<RegressionDetail>,
}

impl Finding {
    pub fn new(
        location: impl Into<String>,
        rule_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            rule_id: rule_id.into(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: RegressionDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Outcome of one gate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub gate: GateKind,
    pub passed: bool,
    /// Count of targets actually examined, after allow-list filtering.
    pub targets_examined: usize,
    pub findings: Vec<Finding>,
}

impl Verdict {
    /// Derive the verdict from the collected findings.
    pub fn new(gate: GateKind, targets_examined: usize, findings: Vec<Finding>) -> Self {
        Self { gate, passed: findings.is_empty(), targets_examined, findings }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.passed {
            ExitStatus::Pass
        } else {
            ExitStatus::Fail
        }
    }
}

/// Process exit status for a gate invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Pass,
    Fail,
    /// Configuration or input error; the run aborted before evaluation.
    Fatal,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Pass => 0,
            ExitStatus::Fail => 1,
            ExitStatus::Fatal => 2,
        }
    }
}
