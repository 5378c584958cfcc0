use std::fs;
use std::path::Path;

use gate_core::config::{DocsLayout, DriftConfig};
use gate_core::evaluate::evaluate_docs;
use gate_core::model::GateKind;
use gate_core::report::render_text;
use gate_core::rules::RuleSet;
use gate_core::services::run_docs_drift;
use gate_core::targets::{doc_target_paths, load_doc_targets, Allowlist, DocFile};
use gate_core::GateError;
use tempfile::tempdir;

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create parent dirs");
    fs::write(path, body).expect("write fixture");
}

/// A small project with a 0.2.0 manifest and one stale reference in docs.
fn seed_project(root: &Path) {
    write(root, "pom.xml", "<project><version>0.2.0</version></project>");
    write(root, "README.md", "# Memris\n\nUse version 0.2.0.\n");
    write(root, "docs/guide.md", "Intro\nInstall 0.1.10 first\n");
    write(root, "docs/api/repos.md", "MemrisRepository<User, Long>\n");
}

#[test]
fn targets_are_readme_then_sorted_docs() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    write(root, "README.md", "");
    write(root, "docs/zeta.md", "");
    write(root, "docs/alpha.md", "");
    write(root, "docs/a/nested.md", "");
    write(root, "docs/a-b/other.md", "");
    write(root, "docs/notes.txt", "");
    write(root, "docs/upper.MD", "");

    let layout = DocsLayout::new(root);
    let relative: Vec<String> =
        doc_target_paths(&layout).expect("paths").iter().map(|p| layout.relative_string(p)).collect();
    assert_eq!(
        relative,
        vec!["README.md", "docs/a/nested.md", "docs/a-b/other.md", "docs/alpha.md", "docs/zeta.md"]
    );
}

#[test]
fn missing_docs_dir_checks_readme_only() {
    let tmp = tempdir().expect("tempdir");
    write(tmp.path(), "README.md", "nothing stale here\n");

    let run = run_docs_drift(&DriftConfig::new(tmp.path())).expect("run");
    assert!(run.verdict.passed);
    assert_eq!(run.verdict.targets_examined, 1);
    assert_eq!(run.baseline, None);
}

#[test]
fn findings_follow_file_line_rule_order() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    seed_project(root);
    write(
        root,
        "docs/api/index.md",
        "ok\n@Index(IndexType.HASH) on 0.1.3 with MemrisRepository<A, B>\n",
    );

    let run = run_docs_drift(&DriftConfig::new(root)).expect("run");
    assert_eq!(run.verdict.gate, GateKind::DocsDrift);
    assert!(!run.verdict.passed);
    assert_eq!(run.verdict.targets_examined, 4);

    let located: Vec<(String, String)> = run
        .verdict
        .findings
        .iter()
        .map(|f| (f.location.clone(), f.rule_id.clone()))
        .collect();
    assert_eq!(
        located,
        vec![
            ("docs/api/index.md:2".to_string(), "stale-version".to_string()),
            ("docs/api/index.md:2".to_string(), "invalid-memrisrepository-arity".to_string()),
            ("docs/api/index.md:2".to_string(), "invalid-index-annotation-syntax".to_string()),
            ("docs/api/repos.md:1".to_string(), "invalid-memrisrepository-arity".to_string()),
            ("docs/guide.md:2".to_string(), "stale-version".to_string()),
        ]
    );
}

#[test]
fn rule_reports_a_line_once_even_with_repeated_matches() {
    let rules = RuleSet::for_docs(None, &["0.1.10".to_string()]).expect("rules");
    let files = vec![DocFile::from_text("README.md", "0.1.10 and 0.1.10 again\n")];
    let findings = evaluate_docs(&rules, &files);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].location, "README.md:1");
}

#[test]
fn allowlisted_files_contribute_no_targets() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    seed_project(root);

    let config = DriftConfig::new(root).with_allowlist(vec!["docs/api/*".to_string()]);
    let run = run_docs_drift(&config).expect("run");
    assert_eq!(run.verdict.targets_examined, 2);
    assert_eq!(run.allowlisted, vec!["docs/api/repos.md"]);
    assert!(run.verdict.findings.iter().all(|f| !f.location.starts_with("docs/api/")));
}

#[test]
fn fully_allowlisted_docs_tree_passes() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    seed_project(root);

    let config = DriftConfig::new(root).with_allowlist(vec!["docs/*".to_string()]);
    let run = run_docs_drift(&config).expect("run");
    assert!(run.verdict.passed, "unexpected findings: {:?}", run.verdict.findings);
    assert_eq!(run.verdict.targets_examined, 1);
    assert_eq!(render_text(&run.verdict), "Docs drift check passed (1 files checked).\n");
}

#[test]
fn allowlisted_readme_may_be_missing() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    write(root, "docs/guide.md", "fine\n");

    let config = DriftConfig::new(root).with_allowlist(vec!["README.md".to_string()]);
    let run = run_docs_drift(&config).expect("run");
    assert!(run.verdict.passed);
    assert_eq!(run.verdict.targets_examined, 1);
}

#[test]
fn missing_readme_is_a_fatal_input_error() {
    let tmp = tempdir().expect("tempdir");
    write(tmp.path(), "docs/guide.md", "fine\n");

    let err = run_docs_drift(&DriftConfig::new(tmp.path())).unwrap_err();
    assert!(matches!(err, GateError::MissingInput(ref path) if path.ends_with("README.md")));
}

#[test]
fn invalid_override_aborts_before_reading_targets() {
    // No README: if targets were read first this would be a missing-input error.
    let tmp = tempdir().expect("tempdir");
    let config = DriftConfig::new(tmp.path()).with_baseline_override(Some("0.2"));
    let err = run_docs_drift(&config).unwrap_err();
    assert!(matches!(err, GateError::InvalidVersionOverride(_)), "unexpected error: {err}");
}

#[test]
fn invalid_allowlist_glob_is_fatal() {
    let err = Allowlist::new(&["docs/[".to_string()]).unwrap_err();
    assert!(matches!(err, GateError::InvalidGlob { .. }), "unexpected error: {err}");
}

#[test]
fn allowlist_star_crosses_directories() {
    let allowlist = Allowlist::new(&["docs/*.md".to_string()]).expect("allowlist");
    assert!(allowlist.is_allowlisted("docs/guide.md"));
    assert!(allowlist.is_allowlisted("docs/api/repos.md"));
    assert!(!allowlist.is_allowlisted("README.md"));
    assert!(!Allowlist::empty().is_allowlisted("README.md"));
}

#[test]
fn override_drives_stale_rule_when_manifest_disagrees() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    seed_project(root);
    write(root, "README.md", "Upgrade from 1.4.2\n");

    let config = DriftConfig::new(root).with_baseline_override(Some("1.5.0"));
    let run = run_docs_drift(&config).expect("run");
    assert_eq!(run.baseline.map(|v| v.to_string()).as_deref(), Some("1.5.0"));
    assert_eq!(run.verdict.findings[0].location, "README.md:1");
    assert_eq!(
        run.verdict.findings[0].message,
        "stale version literal detected (expected docs baseline: 1.5.0)"
    );
}

#[test]
fn load_doc_targets_numbers_lines_from_one() {
    let tmp = tempdir().expect("tempdir");
    write(tmp.path(), "README.md", "first\r\nsecond\nthird");

    let targets =
        load_doc_targets(&DocsLayout::new(tmp.path()), &Allowlist::empty()).expect("targets");
    let lines = &targets.files[0].lines;
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].number, 1);
    assert_eq!(lines[0].text, "first");
    assert_eq!(lines[2].number, 3);
}

#[test]
fn repeated_runs_are_identical() {
    let tmp = tempdir().expect("tempdir");
    seed_project(tmp.path());

    let config = DriftConfig::new(tmp.path());
    let first = run_docs_drift(&config).expect("first run");
    let second = run_docs_drift(&config).expect("second run");
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(render_text(&first.verdict), render_text(&second.verdict));
}
