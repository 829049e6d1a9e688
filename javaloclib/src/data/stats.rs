//! Core data structures for line counts.
//!
//! Two levels of counting exist:
//!
//! - [`LineCounts`]: blank, comment and code lines, for one file or summed over many
//! - [`CountResult`]: the snapshot of a whole run, adding the file totals

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::classifier::LineKind;

/// Blank, comment and code line counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    /// Blank lines (nothing left after trimming)
    pub blanks: u64,
    /// Comment lines (`//`, `/* */` and every line inside a block comment)
    pub comments: u64,
    /// Everything else
    pub code: u64,
}

impl LineCounts {
    /// Create a new LineCounts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line.
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.blanks += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Code => self.code += 1,
        }
    }

    /// Total number of lines counted.
    pub fn total(&self) -> u64 {
        self.blanks + self.comments + self.code
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            blanks: self.blanks + other.blanks,
            comments: self.comments + other.comments,
            code: self.code + other.code,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.blanks += other.blanks;
        self.comments += other.comments;
        self.code += other.code;
    }
}

/// Result of counting a path.
///
/// `total_files >= unique_files` always holds: every discovered file is
/// counted once, but only readable files with distinct content are unique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Files discovered, including duplicates and unreadable files
    pub total_files: u64,
    /// Files with distinct content
    pub unique_files: u64,
    /// Line counts summed over the unique files
    pub lines: LineCounts,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }
}
