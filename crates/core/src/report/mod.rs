//! Report rendering.
//!
//! Reports are pure functions of a [`Verdict`], so two runs over the same
//! inputs render byte-identical output.

use crate::coverage::CoverageSummary;
use crate::model::{Finding, Verdict};

/// One greppable line per finding: `LOCATION: [RULE_ID] MESSAGE`.
pub fn finding_line(finding: &Finding) -> String {
    format!("{}: [{}] {}", finding.location, finding.rule_id, finding.message)
}

/// Text report for a verdict, newline-terminated.
///
/// A failing verdict lists every finding in evaluation order; a passing one is
/// a single summary line with the number of targets examined.
pub fn render_text(verdict: &Verdict) -> String {
    let title = verdict.gate.title();
    if verdict.passed {
        return format!(
            "{title} passed ({} {} checked).\n",
            verdict.targets_examined,
            verdict.gate.target_noun()
        );
    }

    let mut out = format!("{title} failed:\n");
    for finding in &verdict.findings {
        out.push_str(&finding_line(finding));
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON report, newline-terminated.
pub fn render_json(verdict: &Verdict) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(verdict)?;
    out.push('\n');
    Ok(out)
}

/// Ranked coverage table showing at most `limit` classes.
pub fn render_coverage(summary: &CoverageSummary, limit: usize) -> String {
    let mut out = format!("Found {} classes\n", summary.classes.len());
    out.push_str("Rank  Coverage%  Missed Covered  Class\n");
    for (idx, class) in summary.classes.iter().take(limit).enumerate() {
        out.push_str(&format!(
            "{:2}.   {:6.2}%   {:6} {:7}  {}\n",
            idx + 1,
            class.percent,
            class.missed,
            class.covered,
            class.name
        ));
    }
    out
}
