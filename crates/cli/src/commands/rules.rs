use anyhow::{Context, Result};
use gate_core::baseline::{resolve_version, Version};
use gate_core::rules::{RuleInfo, RuleSet};
use serde::Serialize;

use crate::commands::{build_drift_config, DocsDriftOptions};

/// Resolved drift rules, as shown by `list-rules`.
#[derive(Debug, Serialize)]
pub struct RuleListing {
    pub baseline: Option<String>,
    pub allowlist: Vec<String>,
    pub rules: Vec<RuleInfo>,
}

/// Resolve the baseline and drift rules without reading any documents.
pub fn drift_rule_listing(options: &DocsDriftOptions) -> Result<RuleListing> {
    let config = build_drift_config(options)?;
    let baseline: Option<Version> =
        resolve_version(config.baseline_override.as_deref(), &config.layout.manifest_path)
            .context("Failed to resolve baseline version")?;
    let rules = RuleSet::for_docs(baseline.as_ref(), &config.stale_versions)
        .context("Failed to build drift rules")?;

    Ok(RuleListing {
        baseline: baseline.map(|v| v.to_string()),
        allowlist: config.allowlist,
        rules: rules.describe(),
    })
}

/// List the drift rules that would be active for a project root.
pub fn list_rules_command(options: &DocsDriftOptions, json: bool) -> Result<()> {
    let listing = drift_rule_listing(options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    match &listing.baseline {
        Some(version) => println!("Baseline version: {version}"),
        None => println!("Baseline version: (none)"),
    }
    if !listing.allowlist.is_empty() {
        println!("Allow-list: {}", listing.allowlist.join(", "));
    }
    println!("Rules:");
    for rule in &listing.rules {
        println!("- {}: {}", rule.id, rule.pattern);
    }
    Ok(())
}
