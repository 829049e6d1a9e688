//! File discovery with a suffix filter.
//!
//! Discovery is best-effort: directories that cannot be listed and entries
//! that vanish mid-walk are skipped, never reported as errors.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Suffix of the files counted by default.
pub const DEFAULT_SUFFIX: &str = ".java";

/// Configuration for file filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Case-sensitive suffix a path must end with
    pub suffix: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl FilterConfig {
    /// Create a filter for [`DEFAULT_SUFFIX`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Match a different suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Check if a path ends with the configured suffix.
    pub fn matches(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(self.suffix.as_str())
    }
}

/// Discover source files under `root`.
///
/// Any path that matches the filter is a candidate, whatever it points to:
/// `root` itself is returned alone without checking that it exists, a
/// matching directory met during the walk is collected and not descended
/// into, and a matching broken symlink is collected too. Their reads fail
/// later, so they only count towards the total.
///
/// Otherwise `root` is walked depth-first with siblings in file name order,
/// following symlinks.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Vec<PathBuf> {
    let root = root.as_ref();

    if filter.matches(root) {
        return vec![root.to_path_buf()];
    }

    let mut walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    let mut files = Vec::new();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                if let Some(path) = unresolved_candidate(&err, filter) {
                    debug!(path = %path.display(), error = %err, "collecting unresolved path");
                    files.push(path.to_path_buf());
                } else {
                    debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
                }
                continue;
            }
        };

        if !filter.matches(entry.path()) {
            continue;
        }

        if entry.file_type().is_dir() {
            walker.skip_current_dir();
        }
        files.push(entry.into_path());
    }

    debug!(root = %root.display(), count = files.len(), "discovered files");

    files
}

/// A walk error on a matching path that exists but is not a directory,
/// such as a broken symlink. Listing failures and loops are not candidates.
fn unresolved_candidate<'a>(err: &'a walkdir::Error, filter: &FilterConfig) -> Option<&'a Path> {
    if err.loop_ancestor().is_some() {
        return None;
    }

    let path = err.path()?;
    if !filter.matches(path) {
        return None;
    }

    match fs::symlink_metadata(path) {
        Ok(meta) if !meta.is_dir() => Some(path),
        _ => None,
    }
}
