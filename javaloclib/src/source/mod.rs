//! Source discovery: find the files to count.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **File discovery**: walk a path and collect files by suffix
//! - **Deduplication**: keep one file per distinct content
//!
//! ## Example
//!
//! ```rust,ignore
//! use javaloclib::source::{deduplicate, discover_files, FilterConfig};
//!
//! let files = discover_files("src", &FilterConfig::new());
//! let dedup = deduplicate(&files);
//! println!("{} of {} files are unique", dedup.unique.len(), dedup.total_files);
//! ```

pub mod dedup;
pub mod filter;

pub use dedup::{
    deduplicate, deduplicate_with, Deduplicated, Fingerprint, SourceFile, UniqueFiles,
};
pub use filter::{discover_files, FilterConfig, DEFAULT_SUFFIX};
