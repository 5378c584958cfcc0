use std::path::Path;

use tracing::info;

use crate::coverage::{parse_jacoco, CoverageSummary};
use crate::error::{read_required, GateResult};

/// Read a JaCoCo XML report and rank its classes by coverage.
pub fn summarize_coverage(path: &Path) -> GateResult<CoverageSummary> {
    let xml = read_required(path)?;
    let summary = CoverageSummary::new(parse_jacoco(path, &xml)?);
    info!(report = %path.display(), classes = summary.classes.len(), "coverage report parsed");
    Ok(summary)
}
