use tracing::info;

use crate::baseline::load_benchmark_baseline;
use crate::config::RegressionConfig;
use crate::error::GateResult;
use crate::evaluate::evaluate_regression;
use crate::model::{GateKind, Verdict};
use crate::targets::load_current_results;

/// Compare current benchmark results against the recorded baseline.
pub fn run_bench_regression(config: &RegressionConfig) -> GateResult<Verdict> {
    config.thresholds.validate()?;
    let baseline = load_benchmark_baseline(&config.baseline_path)?;
    let current = load_current_results(&config.current_path)?;

    let findings = evaluate_regression(&baseline, &current, &config.thresholds);
    let verdict = Verdict::new(GateKind::BenchRegression, baseline.len(), findings);

    info!(
        benchmarks = baseline.len(),
        current = current.len(),
        skipped_results = current.skipped,
        findings = verdict.findings.len(),
        "benchmark regression check finished"
    );
    Ok(verdict)
}
