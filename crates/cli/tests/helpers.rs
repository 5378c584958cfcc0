use std::fs;

use ci_gates::canonicalize_or_current;
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    fs::create_dir_all(&nested).expect("create nested");

    let root = nested.display().to_string();
    let result = canonicalize_or_current(&root).expect("canonicalize");
    assert_eq!(result, nested.canonicalize().expect("canonicalize nested"));
}

/// A root that does not exist is kept (relative to the cwd) so the gate can
/// report the missing readme itself.
#[test]
fn canonicalize_or_current_keeps_missing_path() {
    let result = canonicalize_or_current("no-such-project-root").expect("resolve");
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(result, cwd.join("no-such-project-root"));
}

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let result = canonicalize_or_current(".").expect("resolve");
    assert_eq!(result, std::env::current_dir().expect("cwd"));
}
