use std::path::{Path, PathBuf};

/// File name of the optional gate configuration, relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "ci-gates.yaml";

/// Logical layout of a documented project on disk.
///
/// This is derived from a chosen root path. It does not perform any IO itself;
/// the target loader and baseline resolver read through these paths.
#[derive(Debug, Clone)]
pub struct DocsLayout {
    /// Root directory of the project.
    pub root: PathBuf,
    /// Top-level readme, always the first document checked.
    pub readme_path: PathBuf,
    /// Directory scanned recursively for markdown (docs).
    pub docs_dir: PathBuf,
    /// Build manifest holding the release version (pom.xml).
    pub manifest_path: PathBuf,
    /// Optional gate configuration file (ci-gates.yaml).
    pub config_path: PathBuf,
}

impl DocsLayout {
    /// Compute the default layout for a project rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let readme_path = root.join("README.md");
        let docs_dir = root.join("docs");
        let manifest_path = root.join("pom.xml");
        let config_path = root.join(DEFAULT_CONFIG_FILE);

        Self { root, readme_path, docs_dir, manifest_path, config_path }
    }

    /// Root-relative path with `/` separators, as used in finding locations and
    /// allow-list matching. Paths outside the root are returned unchanged.
    pub fn relative_string(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}
