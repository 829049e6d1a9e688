//! Output formatting: present a count result.
//!
//! This module handles the final stage of the pipeline. The report is a
//! single line of five counts joined by `-`:
//!
//! ```text
//! total_files-unique_files-blank_lines-comment_lines-code_lines
//! ```

pub mod report;

pub use report::{render, Report};
