use std::path::Path;

use anyhow::{Context, Result};
use gate_core::config::{load_gates_file, load_gates_file_if_present, GatesFile};
use gate_core::model::Verdict;
use gate_core::report::{render_json, render_text};

/// Load the gate config file.
///
/// An explicit `--config` path must exist; the fallback path (if any) is only
/// read when present.
pub fn load_config_file(explicit: Option<&str>, fallback: Option<&Path>) -> Result<GatesFile> {
    if let Some(path) = explicit {
        let path = Path::new(path);
        return load_gates_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()));
    }
    match fallback {
        Some(path) => Ok(load_gates_file_if_present(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?
            .unwrap_or_default()),
        None => Ok(GatesFile::default()),
    }
}

/// Render a verdict as text or JSON.
pub fn render_verdict(verdict: &Verdict, json: bool) -> Result<String> {
    if json {
        return render_json(verdict).context("Failed to serialize report");
    }
    Ok(render_text(verdict))
}
