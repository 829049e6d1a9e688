//! High-level counting API.
//!
//! This module drives the whole pipeline: discover files under a path,
//! deduplicate them by content, and classify every line of the unique ones.

use std::path::Path;

use tracing::debug;

use crate::source::dedup::{deduplicate_with, SourceFile};
use crate::source::filter::{discover_files, FilterConfig};
use crate::Result;

use super::classifier::{split_lines, LineClassifier};
use super::stats::{CountResult, LineCounts};

/// Options for counting.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// File filter configuration
    pub file_filter: FilterConfig,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }
}

/// Count the lines of one file's text.
///
/// Classification starts outside any block comment.
///
/// # Example
///
/// ```rust
/// use javaloclib::count_source;
///
/// let counts = count_source("/*\n * Header\n */\nclass A {\n\n    // todo\n}\n");
/// assert_eq!(counts.comments, 4);
/// assert_eq!(counts.blanks, 1);
/// assert_eq!(counts.code, 2);
/// ```
pub fn count_source(text: &str) -> LineCounts {
    let mut classifier = LineClassifier::new();
    let mut counts = LineCounts::new();

    for line in split_lines(text) {
        counts.record(classifier.classify(line));
    }

    counts
}

/// Count the lines of a single file.
///
/// Unlike [`count_path`], a read failure is returned to the caller.
///
/// # Example
///
/// ```rust
/// use javaloclib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("Main.java");
/// fs::write(&file_path, "class Main {\n    // entry\n}\n").unwrap();
///
/// let counts = count_file(&file_path).unwrap();
/// assert_eq!(counts.code, 2);
/// assert_eq!(counts.comments, 1);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<LineCounts> {
    let file = SourceFile::read(path)?;
    Ok(count_source(&file.text()))
}

/// Count the lines of a file already in memory.
pub fn count_source_file(file: &SourceFile) -> LineCounts {
    let counts = count_source(&file.text());
    debug!(
        path = %file.path.display(),
        blanks = counts.blanks,
        comments = counts.comments,
        code = counts.code,
        "counted file"
    );
    counts
}

/// Count files and lines under a path.
///
/// This is the main entry point. It:
/// 1. Discovers files matching the filter (a matching root is taken as-is)
/// 2. Deduplicates them by content
/// 3. Classifies every line of each unique file as soon as it is read
///
/// Unreadable paths are skipped, so a missing or empty root yields zeros.
///
/// # Example
///
/// ```rust
/// use javaloclib::{count_path, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("copy")).unwrap();
/// fs::write(dir.path().join("A.java"), "class A {}\n").unwrap();
/// fs::write(dir.path().join("copy/A.java"), "class A {}\n").unwrap();
///
/// let result = count_path(dir.path(), &CountOptions::new());
/// assert_eq!(result.total_files, 2);
/// assert_eq!(result.unique_files, 1);
/// assert_eq!(result.lines.code, 1);
/// ```
pub fn count_path(root: impl AsRef<Path>, options: &CountOptions) -> CountResult {
    let files = discover_files(root, &options.file_filter);
    let mut lines = LineCounts::new();
    let dedup = deduplicate_with(&files, |file| lines += count_source_file(file));

    CountResult {
        total_files: dedup.total_files as u64,
        unique_files: dedup.unique.len() as u64,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "package app;\n\n// entry point\nclass Main {\n\n}\n";

    fn create_java_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_count_source() {
        let counts = count_source(SAMPLE);

        assert_eq!(counts.blanks, 2);
        assert_eq!(counts.comments, 1);
        assert_eq!(counts.code, 3);
    }

    #[test]
    fn test_count_source_crlf() {
        let counts = count_source("/* a\r\n b */\r\nint x;\r\n\r\n");

        assert_eq!(counts.comments, 2);
        assert_eq!(counts.code, 1);
        assert_eq!(counts.blanks, 1);
    }

    #[test]
    fn test_count_source_unterminated_last_line() {
        assert_eq!(count_source("int x;\nint y;").code, 2);
        assert_eq!(count_source("int x;\n   ").blanks, 1);
    }

    #[test]
    fn test_block_state_resets_between_files() {
        let temp = tempdir().unwrap();
        create_java_file(&temp.path().join("A.java"), "/* never closed\nint a;\n");
        create_java_file(&temp.path().join("B.java"), "int b;\n");

        let result = count_path(temp.path(), &CountOptions::new());

        assert_eq!(result.lines.comments, 2);
        assert_eq!(result.lines.code, 1);
    }

    #[test]
    fn test_count_path_with_duplicate() {
        let temp = tempdir().unwrap();
        create_java_file(&temp.path().join("app/Main.java"), SAMPLE);
        create_java_file(&temp.path().join("backup/nested/Main.java"), SAMPLE);

        let result = count_path(temp.path(), &CountOptions::new());

        assert_eq!(result.total_files, 2);
        assert_eq!(result.unique_files, 1);
        assert_eq!(result.lines.blanks, 2);
        assert_eq!(result.lines.comments, 1);
        assert_eq!(result.lines.code, 3);
    }

    #[test]
    fn test_count_path_lines_sum_over_unique_files() {
        let temp = tempdir().unwrap();
        create_java_file(&temp.path().join("A.java"), "int a;\n\n");
        create_java_file(&temp.path().join("B.java"), "// b\nint b;\nint c;\n");
        create_java_file(&temp.path().join("C.java"), "int a;\n\n");
        create_java_file(&temp.path().join("notes.txt"), "ignored\n");

        let result = count_path(temp.path(), &CountOptions::new());

        assert_eq!(result.total_files, 3);
        assert_eq!(result.unique_files, 2);
        assert_eq!(result.lines.total(), 5);
        assert!(result.total_files >= result.unique_files);
    }

    #[test]
    fn test_count_path_empty_directory() {
        let temp = tempdir().unwrap();

        assert_eq!(count_path(temp.path(), &CountOptions::new()), CountResult::new());
    }

    #[test]
    fn test_count_path_nonexistent() {
        let result = count_path("/nonexistent/path", &CountOptions::new());

        assert_eq!(result, CountResult::new());
    }

    #[test]
    fn test_count_path_nonexistent_matching_root() {
        let result = count_path("/nonexistent/Missing.java", &CountOptions::new());

        assert_eq!(result.total_files, 1);
        assert_eq!(result.unique_files, 0);
        assert_eq!(result.lines, LineCounts::new());
    }

    #[test]
    fn test_count_path_single_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Main.java");
        create_java_file(&file, SAMPLE);
        create_java_file(&temp.path().join("Other.java"), "int x;\n");

        let result = count_path(&file, &CountOptions::new());

        assert_eq!(result.total_files, 1);
        assert_eq!(result.unique_files, 1);
        assert_eq!(result.lines.code, 3);
    }

    #[test]
    fn test_count_path_custom_suffix() {
        let temp = tempdir().unwrap();
        create_java_file(&temp.path().join("main.c"), "int main() {\n}\n");
        create_java_file(&temp.path().join("Main.java"), "class Main {}\n");

        let options = CountOptions::new().filter(FilterConfig::new().with_suffix(".c"));
        let result = count_path(temp.path(), &options);

        assert_eq!(result.total_files, 1);
        assert_eq!(result.lines.code, 2);
    }

    #[test]
    fn test_count_path_invalid_utf8() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("Latin.java"), b"// caf\xe9\nint x;\n").unwrap();

        let result = count_path(temp.path(), &CountOptions::new());

        assert_eq!(result.lines.comments, 1);
        assert_eq!(result.lines.code, 1);
    }

    #[test]
    fn test_count_path_matching_directory_is_unreadable_candidate() {
        let temp = tempdir().unwrap();
        create_java_file(&temp.path().join("lib.java/Inner.java"), "int a;\n");

        let nested = count_path(temp.path(), &CountOptions::new());
        let as_root = count_path(temp.path().join("lib.java"), &CountOptions::new());

        assert_eq!(nested.total_files, 1);
        assert_eq!(nested.unique_files, 0);
        assert_eq!(nested.lines, LineCounts::new());
        assert_eq!(nested, as_root);
    }

    #[cfg(unix)]
    #[test]
    fn test_count_path_broken_symlink_counts_in_total() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        create_java_file(&temp.path().join("A.java"), "int a;\n");
        symlink(temp.path().join("gone"), temp.path().join("B.java")).unwrap();

        let result = count_path(temp.path(), &CountOptions::new());

        assert_eq!(result.total_files, 2);
        assert_eq!(result.unique_files, 1);
        assert_eq!(result.lines.code, 1);
    }

    #[test]
    fn test_count_file_missing() {
        assert!(count_file("/nonexistent/Missing.java").is_err());
    }
}
