//! Data collection: classify lines and aggregate counts.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Classification**: a per-line state machine for `//` and `/* */` comments
//! - **Statistics**: `LineCounts` and the run-level `CountResult`
//! - **Counting**: high-level API (`count_path`, `count_file`, `count_source`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use javaloclib::data::{count_path, CountOptions};
//!
//! let result = count_path(".", &CountOptions::new());
//! println!("Total code lines: {}", result.lines.code);
//! ```

pub mod classifier;
pub mod counter;
pub mod stats;

pub use classifier::{classify_line, split_lines, ClassifierState, LineClassifier, LineKind};
pub use counter::{count_file, count_path, count_source, count_source_file, CountOptions};
pub use stats::{CountResult, LineCounts};
