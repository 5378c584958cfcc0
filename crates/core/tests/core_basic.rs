use gate_core::model::{ExitStatus, Finding, GateKind, Verdict};
use gate_core::version;

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn verdict_passes_only_without_findings() {
    let pass = Verdict::new(GateKind::DocsDrift, 3, Vec::new());
    assert!(pass.passed);
    assert_eq!(pass.exit_status(), ExitStatus::Pass);

    let fail = Verdict::new(
        GateKind::BenchRegression,
        1,
        vec![Finding::new("a", "missing-benchmark-result", "missing benchmark result")],
    );
    assert!(!fail.passed);
    assert_eq!(fail.exit_status(), ExitStatus::Fail);
}

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(ExitStatus::Pass.code(), 0);
    assert_eq!(ExitStatus::Fail.code(), 1);
    assert_eq!(ExitStatus::Fatal.code(), 2);
}
