use tracing::info;

use crate::baseline::{resolve_version, Version};
use crate::config::DriftConfig;
use crate::error::GateResult;
use crate::evaluate::evaluate_docs;
use crate::model::{GateKind, Verdict};
use crate::rules::{RuleInfo, RuleSet};
use crate::targets::{load_doc_targets, Allowlist};

/// Result of a documentation drift run.
#[derive(Debug, Clone)]
pub struct DriftRun {
    /// Baseline version the stale-version rule was derived from, if any.
    pub baseline: Option<Version>,
    pub rules: Vec<RuleInfo>,
    /// Root-relative paths skipped by the allow-list.
    pub allowlisted: Vec<String>,
    pub verdict: Verdict,
}

/// Check the readme and docs tree for drift patterns.
pub fn run_docs_drift(config: &DriftConfig) -> GateResult<DriftRun> {
    let baseline =
        resolve_version(config.baseline_override.as_deref(), &config.layout.manifest_path)?;
    let allowlist = Allowlist::new(&config.allowlist)?;
    let rules = RuleSet::for_docs(baseline.as_ref(), &config.stale_versions)?;

    let targets = load_doc_targets(&config.layout, &allowlist)?;
    let findings = evaluate_docs(&rules, &targets.files);
    let verdict = Verdict::new(GateKind::DocsDrift, targets.files_checked(), findings);

    info!(
        files_checked = verdict.targets_examined,
        allowlisted = targets.allowlisted.len(),
        rules = ?rules.ids(),
        findings = verdict.findings.len(),
        "docs drift check finished"
    );

    Ok(DriftRun { baseline, rules: rules.describe(), allowlisted: targets.allowlisted, verdict })
}
