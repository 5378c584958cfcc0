//! Rule sets for the two gates.
//!
//! Both gates use a small, closed set of rules identified by stable ids:
//! - the drift gate matches text patterns against documentation lines;
//! - the regression gate applies numeric threshold checks per benchmark.

mod regression;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::baseline::Version;
use crate::error::{GateError, GateResult};

pub use regression::{RegressionCheck, RegressionThresholds};

pub const STALE_VERSION_RULE: &str = "stale-version";
pub const REPOSITORY_ARITY_RULE: &str = "invalid-memrisrepository-arity";
pub const INDEX_SYNTAX_RULE: &str = "invalid-index-annotation-syntax";

/// A documentation rule: an id, a line pattern, and the message to report.
#[derive(Debug, Clone)]
pub struct DocRule {
    pub id: String,
    pub pattern: Regex,
    pub message: String,
}

impl DocRule {
    pub fn new(id: &str, pattern: &str, message: impl Into<String>) -> GateResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|source| GateError::InvalidPattern { rule_id: id.to_string(), source })?;
        Ok(Self { id: id.to_string(), pattern, message: message.into() })
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Serializable summary of a rule for reports and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub id: String,
    pub pattern: String,
    pub message: String,
}

/// Ordered documentation rules. Every rule runs against every line.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<DocRule>,
}

impl RuleSet {
    /// Build the drift rules for a run.
    ///
    /// Literal stale versions take precedence over baseline inference. The
    /// stale-version rule, when present, comes first; the structural rules
    /// are always active.
    pub fn for_docs(baseline: Option<&Version>, stale_literals: &[String]) -> GateResult<Self> {
        let mut rules = Vec::with_capacity(3);

        let stale_message = match baseline {
            Some(version) => {
                format!("stale version literal detected (expected docs baseline: {version})")
            }
            None => "stale version literal detected".to_string(),
        };
        let stale_pattern = if stale_literals.is_empty() {
            baseline.and_then(stale_version_pattern)
        } else {
            Some(literal_pattern(stale_literals))
        };
        match stale_pattern {
            Some(pattern) => {
                debug!(%pattern, "stale-version rule active");
                rules.push(DocRule::new(STALE_VERSION_RULE, &pattern, stale_message)?);
            }
            None => debug!("no stale-version rule for this run"),
        }

        rules.push(DocRule::new(
            REPOSITORY_ARITY_RULE,
            r"MemrisRepository<[^>\n]+,\s*[^>\n]+>",
            "MemrisRepository must use one generic type parameter: MemrisRepository<T>",
        )?);
        rules.push(DocRule::new(
            INDEX_SYNTAX_RULE,
            r"@Index\(\s*IndexType\.",
            "invalid @Index syntax; use @Index(type = Index.IndexType.X)",
        )?);

        Ok(Self { rules })
    }

    pub fn from_rules(rules: Vec<DocRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[DocRule] {
        &self.rules
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn describe(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id.clone(),
                pattern: r.pattern.as_str().to_string(),
                message: r.message.clone(),
            })
            .collect()
    }
}

/// Pattern matching versions from the release line preceding `baseline`.
///
/// `M.m.p` with `m > 0` flags `M.(m-1).*`; `M.0.p` with `M > 0` flags
/// `(M-1).*.*`; `0.0.p` has no predecessor and yields `None`.
pub fn stale_version_pattern(baseline: &Version) -> Option<String> {
    if baseline.minor > 0 {
        Some(format!(r"\b{}\.{}\.\d+\b", baseline.major, baseline.minor - 1))
    } else if baseline.major > 0 {
        Some(format!(r"\b{}\.\d+\.\d+\b", baseline.major - 1))
    } else {
        None
    }
}

/// Pattern matching any of `literals` verbatim as a whole word.
pub fn literal_pattern(literals: &[String]) -> String {
    let alternatives: Vec<String> = literals.iter().map(|l| regex::escape(l)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}
