use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration or input errors.
///
/// Any of these aborts a gate before a single target is evaluated. Policy
/// violations are never errors; they are reported as findings.
#[derive(Debug, Error)]
pub enum GateError {
    /// An explicit baseline version override that is not `major.minor.patch`.
    #[error("Invalid baseline version override '{0}'; expected major.minor.patch")]
    InvalidVersionOverride(String),

    #[error("Invalid allow-list glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid rule pattern for '{rule_id}': {source}")]
    InvalidPattern {
        rule_id: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid {name} threshold {value}; expected a fraction between 0 and 1")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A required input file does not exist.
    #[error("Required input not found: {0}")]
    MissingInput(PathBuf),

    #[error("Malformed baseline {path}: {reason}")]
    MalformedBaseline { path: PathBuf, reason: String },

    #[error("Malformed benchmark results {path}: {reason}")]
    MalformedResults { path: PathBuf, reason: String },

    #[error("Malformed coverage report {path}: {reason}")]
    MalformedCoverage { path: PathBuf, reason: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

impl GateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GateError::MissingInput(path)
        } else {
            GateError::Io { path, source }
        }
    }
}

/// Read a required UTF-8 file, mapping a missing file to [`GateError::MissingInput`].
pub(crate) fn read_required(path: &std::path::Path) -> GateResult<String> {
    std::fs::read_to_string(path).map_err(|err| GateError::io(path, err))
}
