//! Target loading: the concrete inputs each gate evaluates.
//!
//! For the drift gate a target is one line of a markdown file. Files are
//! enumerated in a fixed order (readme first, then `docs/**/*.md` sorted by
//! path) and allow-listed files are dropped before they are read.

mod bench;

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::DocsLayout;
use crate::error::{read_required, GateError, GateResult};

pub use bench::{load_current_results, parse_current_results, CurrentResults};

/// Glob patterns excluding whole files from evaluation.
///
/// Patterns match root-relative `/`-separated paths; `*` also matches `/`.
#[derive(Debug, Clone)]
pub struct Allowlist {
    patterns: Vec<String>,
    globs: GlobSet,
}

impl Allowlist {
    pub fn new(patterns: &[String]) -> GateResult<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|source| GateError::InvalidGlob { pattern: pattern.clone(), source })?;
            builder.add(glob);
        }
        let globs = builder
            .build()
            .map_err(|source| GateError::InvalidGlob { pattern: patterns.join(","), source })?;
        Ok(Self { patterns: patterns.to_vec(), globs })
    }

    pub fn empty() -> Self {
        Self { patterns: Vec::new(), globs: GlobSet::empty() }
    }

    pub fn is_allowlisted(&self, relative: &str) -> bool {
        self.globs.is_match(relative)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// One line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    /// 1-based line number.
    pub number: usize,
    pub text: String,
}

/// A loaded document, decomposed into line targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    pub relative_path: String,
    pub lines: Vec<DocLine>,
}

impl DocFile {
    pub fn from_text(relative_path: impl Into<String>, text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| DocLine { number: idx + 1, text: line.to_string() })
            .collect();
        Self { relative_path: relative_path.into(), lines }
    }
}

/// Documents selected for a drift run.
#[derive(Debug, Clone, Default)]
pub struct DocTargets {
    pub files: Vec<DocFile>,
    /// Root-relative paths excluded by the allow-list, in enumeration order.
    pub allowlisted: Vec<String>,
}

impl DocTargets {
    /// Number of files actually checked (allow-listed files excluded).
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }
}

/// Enumerate candidate documents: the readme, then every markdown file under
/// the docs directory sorted by path. A missing docs directory yields none.
pub fn doc_target_paths(layout: &DocsLayout) -> GateResult<Vec<PathBuf>> {
    let mut targets = vec![layout.readme_path.clone()];
    if !layout.docs_dir.is_dir() {
        debug!(docs_dir = %layout.docs_dir.display(), "no docs directory");
        return Ok(targets);
    }

    let mut docs = Vec::new();
    for entry in WalkDir::new(&layout.docs_dir) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(&layout.docs_dir).to_path_buf();
            GateError::Io { path, source: err.into() }
        })?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            docs.push(entry.into_path());
        }
    }
    docs.sort();
    targets.extend(docs);
    Ok(targets)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Enumerate, filter and read the documents for a drift run.
pub fn load_doc_targets(layout: &DocsLayout, allowlist: &Allowlist) -> GateResult<DocTargets> {
    let mut targets = DocTargets::default();
    for path in doc_target_paths(layout)? {
        let relative = layout.relative_string(&path);
        if allowlist.is_allowlisted(&relative) {
            debug!(file = %relative, "allow-listed; skipping");
            targets.allowlisted.push(relative);
            continue;
        }
        let text = read_required(&path)?;
        let file = DocFile::from_text(relative, &text);
        debug!(file = %file.relative_path, lines = file.lines.len(), "loaded document");
        targets.files.push(file);
    }
    Ok(targets)
}
