//! # javaloclib
//!
//! A lines of code counter for Java sources that skips duplicated files.
//!
//! ## Overview
//!
//! Counting runs as a short pipeline:
//!
//! 1. **Discover** every file under a path whose name ends with `.java`
//!    (see [`FilterConfig`] for other suffixes), in a deterministic order
//! 2. **Deduplicate** by content: files with identical bytes are counted once,
//!    the first path found wins
//! 3. **Classify** each line of the unique files as blank, comment or code
//! 4. **Report** the five totals as `files-unique-blank-comment-code`
//!
//! Every stage is best-effort. Unreadable directories and files are skipped
//! and logged at debug level through `tracing`; counting a path never fails.
//!
//! ## Line rules
//!
//! Lines are trimmed, then:
//!
//! - **Comment**: inside a `/* */` block, or starting with `//` or `/*`
//! - **Blank**: empty
//! - **Code**: everything else, including single-character lines such as `}`
//!
//! The rules work line by line. Comment markers inside string literals and
//! code followed by a trailing comment are not told apart.
//!
//! ## Example
//!
//! ```rust
//! use javaloclib::{count_path, render, CountOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::create_dir(dir.path().join("vendor")).unwrap();
//! let source = "class Main {\n\n    // entry\n    void run() {}\n\n}\n";
//! fs::write(dir.path().join("src/Main.java"), source).unwrap();
//! fs::write(dir.path().join("vendor/Main.java"), source).unwrap();
//!
//! let result = count_path(dir.path(), &CountOptions::new());
//! assert_eq!(render(&result), "2-1-2-1-3");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{
    classify_line, count_file, count_path, count_source, ClassifierState, CountOptions,
    CountResult, LineClassifier, LineCounts, LineKind,
};
pub use error::JavalocError;
pub use output::{render, Report};
pub use source::{deduplicate, discover_files, FilterConfig, Fingerprint, DEFAULT_SUFFIX};

/// Result type for javaloclib operations
pub type Result<T> = std::result::Result<T, JavalocError>;
