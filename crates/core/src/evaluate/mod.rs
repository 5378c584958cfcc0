//! Rule evaluation.
//!
//! Evaluators never stop at the first violation: every rule runs against
//! every target and all findings are returned in a reproducible order.

use tracing::debug;

use crate::baseline::BenchmarkBaseline;
use crate::model::{Finding, RegressionDetail};
use crate::rules::{RegressionCheck, RegressionThresholds, RuleSet};
use crate::targets::{CurrentResults, DocFile};

/// Apply every rule to every line.
///
/// Findings are ordered by file, then line, then rule. A rule reports a line
/// at most once, however many times its pattern occurs in it.
pub fn evaluate_docs(rules: &RuleSet, files: &[DocFile]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for file in files {
        for line in &file.lines {
            for rule in rules.rules() {
                if rule.matches(&line.text) {
                    findings.push(Finding::new(
                        format!("{}:{}", file.relative_path, line.number),
                        rule.id.as_str(),
                        rule.message.as_str(),
                    ));
                }
            }
        }
    }
    findings
}

/// Compare current scores against the baseline, in baseline order.
///
/// Benchmarks that only exist in the current results are not gated.
pub fn evaluate_regression(
    baseline: &BenchmarkBaseline,
    current: &CurrentResults,
    thresholds: &RegressionThresholds,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (benchmark, baseline_score) in baseline.iter() {
        let Some(current_score) = current.get(benchmark) else {
            findings.push(check_finding(
                benchmark,
                RegressionCheck::MissingResult,
                "missing benchmark result".to_string(),
            ));
            continue;
        };
        if !baseline_score.is_finite() || baseline_score <= 0.0 {
            findings.push(check_finding(
                benchmark,
                RegressionCheck::InvalidBaseline,
                format!("invalid baseline score: {baseline_score}"),
            ));
            continue;
        }

        let allowed = thresholds.allowed_for(benchmark);
        let min_score = baseline_score * (1.0 - allowed);
        debug!(benchmark, baseline_score, current_score, min_score, "compared benchmark");
        if current_score < min_score {
            let detail = RegressionDetail {
                baseline: baseline_score,
                current: current_score,
                regression: (baseline_score - current_score) / baseline_score,
                allowed,
            };
            findings.push(
                check_finding(benchmark, RegressionCheck::Regression, regression_message(&detail))
                    .with_detail(detail),
            );
        }
    }
    findings
}

fn check_finding(benchmark: &str, check: RegressionCheck, message: String) -> Finding {
    Finding::new(benchmark, check.id(), message)
}

/// `baseline=100.000, current=85.000, regression=15.00%, allowed=10.00%`
pub fn regression_message(detail: &RegressionDetail) -> String {
    format!(
        "baseline={:.3}, current={:.3}, regression={:.2}%, allowed={:.2}%",
        detail.baseline,
        detail.current,
        detail.regression * 100.0,
        detail.allowed * 100.0
    )
}
