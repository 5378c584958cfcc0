//! Gate configuration.
//!
//! Every gate run takes an explicit configuration value. Frontends layer it
//! from (highest first) command-line flags, environment variables, the
//! optional `ci-gates.yaml` file, and the defaults defined here. Nothing in
//! this crate reads the process environment.

mod layout;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{read_required, GateError, GateResult};
use crate::rules::RegressionThresholds;

pub use layout::{DocsLayout, DEFAULT_CONFIG_FILE};

/// Serializable gate configuration file (`ci-gates.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatesFile {
    pub docs_drift: DocsDriftSection,
    pub bench_regression: BenchRegressionSection,
}

/// `docs_drift:` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsDriftSection {
    /// Globs (root-relative) excluded from the drift check.
    pub allowlist: Vec<String>,
    /// Manifest path relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_version: Option<String>,
    pub stale_versions: Vec<String>,
}

/// `bench_regression:` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchRegressionSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_threshold: Option<f64>,
}

/// Load a config file that the caller asked for explicitly.
pub fn load_gates_file(path: &Path) -> GateResult<GatesFile> {
    let body = read_required(path)?;
    parse_gates_file(path, &body)
}

/// Load the config file if it exists; a missing file is not an error.
pub fn load_gates_file_if_present(path: &Path) -> GateResult<Option<GatesFile>> {
    if !path.is_file() {
        return Ok(None);
    }
    load_gates_file(path).map(Some)
}

fn parse_gates_file(path: &Path, body: &str) -> GateResult<GatesFile> {
    // An empty YAML document deserializes as unit, not as an empty mapping.
    let blank = body.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#'));
    if blank {
        return Ok(GatesFile::default());
    }
    serde_yaml::from_str(body)
        .map_err(|source| GateError::Yaml { path: path.to_path_buf(), source })
}

/// Split a comma-separated list, trimming entries and dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Configuration for one documentation drift run.
#[derive(Debug, Clone)]
pub struct DriftConfig {
    pub layout: DocsLayout,
    pub allowlist: Vec<String>,
    /// Explicit baseline version; must be strict `major.minor.patch`.
    pub baseline_override: Option<String>,
    /// Literal stale versions; when non-empty they replace baseline inference.
    pub stale_versions: Vec<String>,
}

impl DriftConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            layout: DocsLayout::new(root),
            allowlist: Vec::new(),
            baseline_override: None,
            stale_versions: Vec::new(),
        }
    }

    /// Apply a config file section. Call this before flag/env overrides so
    /// they take precedence; allow-list globs accumulate.
    pub fn apply_file(&mut self, section: &DocsDriftSection) {
        self.allowlist.extend(section.allowlist.iter().cloned());
        if let Some(manifest) = &section.manifest {
            self.layout.manifest_path = self.layout.root.join(manifest);
        }
        if let Some(version) = non_blank(section.baseline_version.as_deref()) {
            self.baseline_override = Some(version);
        }
        if !section.stale_versions.is_empty() {
            self.stale_versions = section.stale_versions.clone();
        }
    }

    pub fn with_allowlist(mut self, globs: impl IntoIterator<Item = String>) -> Self {
        self.allowlist.extend(globs);
        self
    }

    pub fn with_baseline_override(mut self, version: Option<&str>) -> Self {
        if let Some(version) = non_blank(version) {
            self.baseline_override = Some(version);
        }
        self
    }

    pub fn with_stale_versions(mut self, literals: Vec<String>) -> Self {
        if !literals.is_empty() {
            self.stale_versions = literals;
        }
        self
    }

    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        if let Some(path) = manifest {
            self.layout.manifest_path =
                if path.is_absolute() { path } else { self.layout.root.join(path) };
        }
        self
    }
}

/// Configuration for one benchmark regression run.
#[derive(Debug, Clone)]
pub struct RegressionConfig {
    /// JSON object mapping benchmark name to prior score.
    pub baseline_path: PathBuf,
    /// JMH-style JSON array of current results.
    pub current_path: PathBuf,
    pub thresholds: RegressionThresholds,
}

impl RegressionConfig {
    pub fn new(baseline_path: impl Into<PathBuf>, current_path: impl Into<PathBuf>) -> Self {
        Self {
            baseline_path: baseline_path.into(),
            current_path: current_path.into(),
            thresholds: RegressionThresholds::default(),
        }
    }

    pub fn apply_file(&mut self, section: &BenchRegressionSection) {
        if let Some(flat) = section.flat_threshold {
            self.thresholds.flat = flat;
        }
        if let Some(embedded) = section.embedded_threshold {
            self.thresholds.embedded = embedded;
        }
    }

    pub fn with_thresholds(mut self, flat: Option<f64>, embedded: Option<f64>) -> Self {
        if let Some(flat) = flat {
            self.thresholds.flat = flat;
        }
        if let Some(embedded) = embedded {
            self.thresholds.embedded = embedded;
        }
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
