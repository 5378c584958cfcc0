//! Baseline resolution: the expected values a gate checks against.
//!
//! The documentation gate compares against the project's release version:
//! - an explicit override wins, and must be a strict `major.minor.patch`;
//! - otherwise the version is read from the build manifest (`pom.xml`);
//! - if neither yields a version, the gate runs without a stale-version rule.
//!
//! The benchmark gate compares against a recorded score per benchmark, see
//! [`BenchmarkBaseline`].

mod bench;

use std::fmt;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{GateError, GateResult};

pub use bench::{load_benchmark_baseline, parse_benchmark_baseline, BenchmarkBaseline};
pub(crate) use bench::score_value;

/// Canonical `major.minor.patch` release version, without pre-release suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Parse exactly three dot-separated decimal components.
    pub fn parse_strict(raw: &str) -> Option<Self> {
        let mut parts = raw.split('.');
        let major = parse_component(parts.next()?)?;
        let minor = parse_component(parts.next()?)?;
        let patch = parse_component(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { major, minor, patch })
    }

    /// Parse a manifest version, dropping any `-pre` or `+build` suffix.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let core = trimmed.split(['-', '+']).next().unwrap_or(trimmed);
        Self::parse_strict(core)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_component(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Resolve the release version for the drift gate.
///
/// An unparsable override is fatal. A missing or unusable manifest is not:
/// the result is `Ok(None)` and the caller skips the baseline-dependent rule.
pub fn resolve_version(
    override_raw: Option<&str>,
    manifest: &Path,
) -> GateResult<Option<Version>> {
    if let Some(raw) = override_raw {
        let version = Version::parse_strict(raw.trim())
            .ok_or_else(|| GateError::InvalidVersionOverride(raw.to_string()))?;
        info!(%version, "using baseline version override");
        return Ok(Some(version));
    }

    let body = match std::fs::read_to_string(manifest) {
        Ok(body) => body,
        Err(err) => {
            warn!(
                manifest = %manifest.display(),
                error = %err,
                "manifest unavailable; skipping stale-version rule"
            );
            return Ok(None);
        }
    };

    let raw = match manifest_version(&body) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            warn!(
                manifest = %manifest.display(),
                "manifest declares no project version; skipping stale-version rule"
            );
            return Ok(None);
        }
        Err(reason) => {
            warn!(
                manifest = %manifest.display(),
                %reason,
                "manifest is not valid XML; skipping stale-version rule"
            );
            return Ok(None);
        }
    };

    match Version::parse_lenient(&raw) {
        Some(version) => {
            info!(%version, manifest = %manifest.display(), "resolved baseline from manifest");
            Ok(Some(version))
        }
        None => {
            warn!(%raw, "manifest version is not major.minor.patch; skipping stale-version rule");
            Ok(None)
        }
    }
}

/// Extract the project version from a Maven `pom.xml` body.
///
/// Uses `project/version`, falling back to `project/properties/revision`. The
/// `project/parent/version` element is never consulted, and `${...}`
/// placeholders count as absent.
pub fn manifest_version(xml: &str) -> Result<Option<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut version = None;
    let mut revision = None;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(start) => {
                stack.push(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(|e| e.to_string())?.trim().to_string();
                match stack.join("/").as_str() {
                    "project/version" => version = Some(value),
                    "project/properties/revision" => revision = Some(value),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(?version, ?revision, "scanned manifest");
    let usable = |v: &String| !v.is_empty() && !v.contains("${");
    Ok(version.filter(usable).or(revision.filter(usable)))
}
