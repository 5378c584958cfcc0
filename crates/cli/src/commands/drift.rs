use std::path::PathBuf;

use anyhow::{Context, Result};
use gate_core::config::{split_list, DriftConfig};
use gate_core::model::ExitStatus;
use gate_core::services::{run_docs_drift, DriftRun};
use tracing::debug;

use crate::canonicalize_or_current;
use crate::commands::{load_config_file, render_verdict};

/// Options for the `docs-drift` and `list-rules` commands, as parsed from
/// flags and environment.
#[derive(Debug, Clone, Default)]
pub struct DocsDriftOptions {
    pub root: String,
    /// Comma-separated allow-list globs.
    pub allowlist: Option<String>,
    pub baseline_version: Option<String>,
    /// Comma-separated literal stale versions.
    pub stale_versions: Option<String>,
    pub manifest: Option<String>,
    pub config: Option<String>,
}

impl DocsDriftOptions {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }
}

/// Layer config file values and flag/env overrides into a drift configuration.
pub fn build_drift_config(options: &DocsDriftOptions) -> Result<DriftConfig> {
    let root = canonicalize_or_current(&options.root)?;
    let mut config = DriftConfig::new(&root);

    let fallback = config.layout.config_path.clone();
    let file = load_config_file(options.config.as_deref(), Some(fallback.as_path()))?;
    config.apply_file(&file.docs_drift);

    let config = config
        .with_allowlist(options.allowlist.as_deref().map(split_list).unwrap_or_default())
        .with_baseline_override(options.baseline_version.as_deref())
        .with_stale_versions(options.stale_versions.as_deref().map(split_list).unwrap_or_default())
        .with_manifest(options.manifest.as_ref().map(PathBuf::from));
    debug!(
        root = %config.layout.root.display(),
        manifest = %config.layout.manifest_path.display(),
        allowlist = ?config.allowlist,
        "drift configuration layered"
    );
    Ok(config)
}

/// Run the drift gate and return it without printing.
pub fn docs_drift_run(options: &DocsDriftOptions) -> Result<DriftRun> {
    let config = build_drift_config(options)?;
    run_docs_drift(&config).with_context(|| {
        format!("Docs drift check aborted for {}", config.layout.root.display())
    })
}

/// Check the readme and docs tree for drift patterns and print the report.
pub fn docs_drift_command(options: &DocsDriftOptions, json: bool) -> Result<ExitStatus> {
    let run = docs_drift_run(options)?;
    print!("{}", render_verdict(&run.verdict, json)?);
    Ok(run.verdict.exit_status())
}
