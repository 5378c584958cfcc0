use std::fs;

use gate_core::baseline::{manifest_version, resolve_version, Version};
use gate_core::GateError;
use tempfile::tempdir;

#[test]
fn strict_parse_requires_three_numeric_components() {
    assert_eq!(Version::parse_strict("0.2.0"), Some(Version::new(0, 2, 0)));
    assert_eq!(Version::parse_strict("12.40.7"), Some(Version::new(12, 40, 7)));
    assert_eq!(Version::parse_strict("1.2"), None);
    assert_eq!(Version::parse_strict("1.2.3.4"), None);
    assert_eq!(Version::parse_strict("1.2.x"), None);
    assert_eq!(Version::parse_strict("1.2.3-SNAPSHOT"), None);
    assert_eq!(Version::parse_strict("v1.2.3"), None);
    assert_eq!(Version::parse_strict("1..3"), None);
}

#[test]
fn lenient_parse_drops_pre_release_and_build_suffix() {
    assert_eq!(Version::parse_lenient("0.2.0-SNAPSHOT"), Some(Version::new(0, 2, 0)));
    assert_eq!(Version::parse_lenient(" 3.1.4+build.9 "), Some(Version::new(3, 1, 4)));
    assert_eq!(Version::parse_lenient("3.1-SNAPSHOT"), None);
}

#[test]
fn version_displays_canonically() {
    assert_eq!(Version::new(1, 0, 12).to_string(), "1.0.12");
}

#[test]
fn override_takes_precedence_over_manifest() {
    let tmp = tempdir().expect("tempdir");
    let pom = tmp.path().join("pom.xml");
    fs::write(&pom, "<project><version>5.0.0</version></project>").expect("write pom");

    let resolved = resolve_version(Some("2.3.4"), &pom).expect("resolve");
    assert_eq!(resolved, Some(Version::new(2, 3, 4)));
}

#[test]
fn unparsable_override_is_fatal() {
    let tmp = tempdir().expect("tempdir");
    let err = resolve_version(Some("2.3"), &tmp.path().join("pom.xml")).unwrap_err();
    assert!(matches!(err, GateError::InvalidVersionOverride(ref raw) if raw == "2.3"));

    let err = resolve_version(Some("2.3.4-rc1"), &tmp.path().join("pom.xml")).unwrap_err();
    assert!(err.to_string().contains("2.3.4-rc1"), "unexpected error: {err}");
}

#[test]
fn missing_manifest_degrades_to_no_baseline() {
    let tmp = tempdir().expect("tempdir");
    let resolved = resolve_version(None, &tmp.path().join("pom.xml")).expect("resolve");
    assert_eq!(resolved, None);
}

#[test]
fn malformed_manifest_degrades_to_no_baseline() {
    let tmp = tempdir().expect("tempdir");
    let pom = tmp.path().join("pom.xml");
    fs::write(&pom, "<project><version>1.2.3</project>").expect("write pom");
    assert_eq!(resolve_version(None, &pom).expect("resolve"), None);

    fs::write(&pom, "<project><version>latest</version></project>").expect("write pom");
    assert_eq!(resolve_version(None, &pom).expect("resolve"), None);
}

#[test]
fn manifest_version_is_normalized() {
    let tmp = tempdir().expect("tempdir");
    let pom = tmp.path().join("pom.xml");
    fs::write(
        &pom,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>io.memris</groupId>
  <artifactId>memris-parent</artifactId>
  <version>0.2.0-SNAPSHOT</version>
</project>
"#,
    )
    .expect("write pom");

    assert_eq!(resolve_version(None, &pom).expect("resolve"), Some(Version::new(0, 2, 0)));
}

#[test]
fn parent_version_is_ignored() {
    let xml = r#"<project>
  <parent>
    <groupId>io.memris</groupId>
    <version>9.9.9</version>
  </parent>
  <artifactId>memris-core</artifactId>
</project>"#;
    assert_eq!(manifest_version(xml).expect("parse"), None);

    let with_own = r#"<project>
  <parent><version>9.9.9</version></parent>
  <version>1.4.0</version>
</project>"#;
    assert_eq!(manifest_version(with_own).expect("parse").as_deref(), Some("1.4.0"));
}

#[test]
fn revision_property_is_the_fallback() {
    let xml = r#"<project>
  <version>${revision}</version>
  <properties>
    <revision>2.0.1</revision>
  </properties>
</project>"#;
    assert_eq!(manifest_version(xml).expect("parse").as_deref(), Some("2.0.1"));

    let placeholder_only = "<project><version>${revision}</version></project>";
    assert_eq!(manifest_version(placeholder_only).expect("parse"), None);
}
