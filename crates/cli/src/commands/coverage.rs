use std::path::Path;

use anyhow::{Context, Result};
use gate_core::model::ExitStatus;
use gate_core::report::render_coverage;
use gate_core::services::summarize_coverage;

/// Print the least-covered classes from a JaCoCo XML report.
///
/// This is informational: it passes whenever the report can be read.
pub fn coverage_summary_command(report: &str, limit: usize, json: bool) -> Result<ExitStatus> {
    let path = Path::new(report);
    let summary = summarize_coverage(path)
        .with_context(|| format!("Coverage summary failed for {}", path.display()))?;

    if json {
        let top: Vec<_> = summary.classes.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&top)?);
    } else {
        print!("{}", render_coverage(&summary, limit));
    }
    Ok(ExitStatus::Pass)
}
