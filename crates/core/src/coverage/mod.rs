//! JaCoCo coverage summaries.
//!
//! Reads the class-level counters of a JaCoCo XML report and ranks classes
//! from least to most covered. This is a report, not a gate: it produces no
//! findings.

use std::cmp::Ordering;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

use crate::error::{GateError, GateResult};

/// Default location of the report in a Maven multi-module build.
pub const DEFAULT_JACOCO_REPORT: &str = "memris-core/target/site/jacoco/jacoco.xml";

/// Line coverage of one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassCoverage {
    /// Dotted class name (`com.example.Foo`).
    pub name: String,
    pub missed: u64,
    pub covered: u64,
    pub percent: f64,
}

impl ClassCoverage {
    pub fn new(name: impl Into<String>, missed: u64, covered: u64) -> Self {
        Self { name: name.into(), missed, covered, percent: coverage_percent(missed, covered) }
    }
}

/// Covered share in percent; an empty counter counts as fully covered.
pub fn coverage_percent(missed: u64, covered: u64) -> f64 {
    let total = missed + covered;
    if total == 0 {
        return 100.0;
    }
    covered as f64 / total as f64 * 100.0
}

/// Ranked classes, least covered first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub classes: Vec<ClassCoverage>,
}

impl CoverageSummary {
    pub fn new(mut classes: Vec<ClassCoverage>) -> Self {
        classes.sort_by(rank_order);
        Self { classes }
    }
}

/// Total order: coverage ascending, then missed lines descending, then name.
pub fn rank_order(a: &ClassCoverage, b: &ClassCoverage) -> Ordering {
    a.percent
        .total_cmp(&b.percent)
        .then_with(|| b.missed.cmp(&a.missed))
        .then_with(|| a.name.cmp(&b.name))
}

#[derive(Default)]
struct Counters {
    line: Option<(u64, u64)>,
    instruction: Option<(u64, u64)>,
}

/// Parse class coverage from a JaCoCo XML body; `path` is only used for errors.
///
/// Only counters that are direct children of a `<class>` inside a `<package>`
/// are read. The `LINE` counter is preferred, `INSTRUCTION` is the fallback,
/// and classes with neither are skipped.
pub fn parse_jacoco(path: &Path, xml: &str) -> GateResult<Vec<ClassCoverage>> {
    let malformed =
        |reason: String| GateError::MalformedCoverage { path: path.to_path_buf(), reason };

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<(String, Counters)> = None;
    let mut classes = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| malformed(e.to_string()))?;
        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                let name = element.local_name().as_ref().to_vec();
                let parent = stack.last().map(Vec::as_slice);
                match (name.as_slice(), parent) {
                    (b"class", Some(b"package")) => {
                        let class_name = attribute(element, b"name")
                            .map_err(&malformed)?
                            .ok_or_else(|| malformed("class without a name".to_string()))?;
                        current = Some((class_name.replace('/', "."), Counters::default()));
                    }
                    (b"counter", Some(b"class")) => {
                        if let Some((_, counters)) = current.as_mut() {
                            read_counter(element, counters).map_err(&malformed)?;
                        }
                    }
                    _ => {}
                }
                let is_start = matches!(event, Event::Start(_));
                if is_start {
                    stack.push(name);
                } else if name == b"class" {
                    // `<class/>` has no counters.
                    current = None;
                }
            }
            Event::End(_) => {
                if stack.pop().as_deref() == Some(b"class".as_slice()) {
                    if let Some((name, counters)) = current.take() {
                        if let Some((missed, covered)) = counters.line.or(counters.instruction) {
                            classes.push(ClassCoverage::new(name, missed, covered));
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(classes)
}

fn read_counter(element: &BytesStart<'_>, counters: &mut Counters) -> Result<(), String> {
    let Some(kind) = attribute(element, b"type")? else {
        return Ok(());
    };
    let slot = match kind.as_str() {
        "LINE" => &mut counters.line,
        "INSTRUCTION" => &mut counters.instruction,
        _ => return Ok(()),
    };
    if slot.is_none() {
        let missed = count_attribute(element, b"missed", &kind)?;
        let covered = count_attribute(element, b"covered", &kind)?;
        *slot = Some((missed, covered));
    }
    Ok(())
}

fn count_attribute(element: &BytesStart<'_>, key: &[u8], kind: &str) -> Result<u64, String> {
    let key_name = String::from_utf8_lossy(key);
    let raw = attribute(element, key)?
        .ok_or_else(|| format!("{kind} counter without '{key_name}'"))?;
    raw.trim().parse().map_err(|_| format!("{kind} counter has non-numeric {key_name}='{raw}'"))
}

fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, String> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.as_ref() == key {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
