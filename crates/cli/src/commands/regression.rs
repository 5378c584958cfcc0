use anyhow::{Context, Result};
use gate_core::config::RegressionConfig;
use gate_core::model::{ExitStatus, Verdict};
use gate_core::services::run_bench_regression;

use crate::commands::{load_config_file, render_verdict};

/// Options for the `bench-regression` command.
#[derive(Debug, Clone, Default)]
pub struct BenchRegressionOptions {
    pub baseline: String,
    pub current: String,
    pub flat_threshold: Option<f64>,
    pub embedded_threshold: Option<f64>,
    pub config: Option<String>,
}

impl BenchRegressionOptions {
    pub fn new(baseline: impl Into<String>, current: impl Into<String>) -> Self {
        Self { baseline: baseline.into(), current: current.into(), ..Self::default() }
    }
}

/// Layer config file values and flags into a regression configuration.
pub fn build_regression_config(options: &BenchRegressionOptions) -> Result<RegressionConfig> {
    let mut config = RegressionConfig::new(&options.baseline, &options.current);
    let file = load_config_file(options.config.as_deref(), None)?;
    config.apply_file(&file.bench_regression);
    Ok(config.with_thresholds(options.flat_threshold, options.embedded_threshold))
}

/// Run the regression gate and return its verdict without printing.
pub fn bench_regression_verdict(options: &BenchRegressionOptions) -> Result<Verdict> {
    let config = build_regression_config(options)?;
    run_bench_regression(&config).context("Benchmark regression check aborted")
}

/// Compare benchmark results against the baseline and print the report.
pub fn bench_regression_command(
    options: &BenchRegressionOptions,
    json: bool,
) -> Result<ExitStatus> {
    let verdict = bench_regression_verdict(options)?;
    print!("{}", render_verdict(&verdict, json)?);
    Ok(verdict.exit_status())
}
