use std::process::ExitCode;

use anyhow::Result;
use ci_gates::commands::{
    bench_regression_command, coverage_summary_command, docs_drift_command, list_rules_command,
    BenchRegressionOptions, DocsDriftOptions,
};
use ci_gates::exit_code;
use ci_gates::logging::{init_tracing, DEFAULT_LOG_LEVEL};
use clap::{Args, Parser, Subcommand};
use gate_core::coverage::DEFAULT_JACOCO_REPORT;
use gate_core::model::ExitStatus;

/// CI quality gates for documentation drift and benchmark regressions.
///
/// This CLI is a thin wrapper around `gate-core`. Every gate prints its report
/// on stdout and exits 0 on pass, 1 on findings, and 2 when its configuration
/// or inputs are unusable.
#[derive(Parser, Debug)]
#[command(name = "ci-gates", version, about = "CI quality gates", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. `info`, `gate_core=debug`).
    #[arg(long, global = true, env = "CI_GATES_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Project root and baseline inputs shared by the drift commands.
#[derive(Args, Debug)]
struct DriftArgs {
    /// Project root holding README.md and docs/. Defaults to the current directory.
    #[arg(long, default_value = ".")]
    root: String,

    /// Comma-separated globs (root-relative) of files to skip.
    #[arg(long, env = "DOCS_DRIFT_ALLOWLIST")]
    allowlist: Option<String>,

    /// Explicit baseline version (major.minor.patch); overrides the manifest.
    #[arg(long, env = "DOCS_DRIFT_BASELINE_VERSION")]
    baseline_version: Option<String>,

    /// Comma-separated literal versions to flag instead of inferring one.
    #[arg(long, env = "DOCS_DRIFT_STALE_VERSIONS")]
    stale_versions: Option<String>,

    /// Build manifest holding the project version. Defaults to <root>/pom.xml.
    #[arg(long)]
    manifest: Option<String>,

    /// Gate config file. Defaults to <root>/ci-gates.yaml when present.
    #[arg(long)]
    config: Option<String>,
}

impl From<DriftArgs> for DocsDriftOptions {
    fn from(args: DriftArgs) -> Self {
        Self {
            root: args.root,
            allowlist: args.allowlist,
            baseline_version: args.baseline_version,
            stale_versions: args.stale_versions,
            manifest: args.manifest,
            config: args.config,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fail when README.md or docs/**/*.md contain stale versions or invalid snippets.
    DocsDrift {
        #[command(flatten)]
        drift: DriftArgs,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the baseline version and drift rules that would be applied.
    ListRules {
        #[command(flatten)]
        drift: DriftArgs,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Fail when benchmark throughput regresses beyond the allowed threshold.
    BenchRegression {
        /// Baseline JSON mapping benchmark name to score.
        #[arg(long)]
        baseline: String,

        /// Current JMH JSON results.
        #[arg(long)]
        current: String,

        /// Allowed regression for flat benchmarks (default 0.10).
        #[arg(long)]
        flat_threshold: Option<f64>,

        /// Allowed regression for embedded benchmarks (default 0.15).
        #[arg(long)]
        embedded_threshold: Option<f64>,

        /// Gate config file (YAML).
        #[arg(long)]
        config: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Rank classes in a JaCoCo XML report from least to most covered.
    CoverageSummary {
        /// Path to jacoco.xml.
        #[arg(default_value = DEFAULT_JACOCO_REPORT)]
        report: String,

        /// Number of classes to show.
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json, &cli.log_level);

    match run(cli.command) {
        Ok(status) => exit_code(status),
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_code(ExitStatus::Fatal)
        }
    }
}

fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::DocsDrift { drift, json } => {
            let options = DocsDriftOptions::from(drift);
            docs_drift_command(&options, json)
        }
        Command::ListRules { drift, json } => {
            let options = DocsDriftOptions::from(drift);
            list_rules_command(&options, json)?;
            Ok(ExitStatus::Pass)
        }
        Command::BenchRegression {
            baseline,
            current,
            flat_threshold,
            embedded_threshold,
            config,
            json,
        } => {
            let options = BenchRegressionOptions {
                baseline,
                current,
                flat_threshold,
                embedded_threshold,
                config,
            };
            bench_regression_command(&options, json)
        }
        Command::CoverageSummary { report, limit, json } => {
            coverage_summary_command(&report, limit, json)
        }
    }
}
