//! Line classifier for C-family comment syntax.
//!
//! Each line is trimmed and assigned exactly one of three kinds:
//!
//! - **blank**: nothing left after trimming
//! - **comment**: a `//` line, a `/* ... */` line, or any line inside a block comment
//! - **code**: everything else
//!
//! The classifier is a line-level heuristic, not a tokenizer. It knows nothing
//! about string literals, so `"// not a comment"` at the start of a line is a
//! comment, and `*/` closes a block whenever it starts or ends the line.

use serde::{Deserialize, Serialize};

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// The kind assigned to a single line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Classifier state carried from one line to the next within a file.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ClassifierState {
    #[default]
    Normal,
    InBlockComment,
}

/// Trim every character at or below U+0020 from both ends.
///
/// This is wider than ASCII whitespace: control characters such as form feed
/// or NUL are stripped as well.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Classify one line given the current state, returning the kind and the next state.
///
/// Markers are only recognized on trimmed lines longer than one character,
/// so a lone `/` or `*` is code.
pub fn classify_line(state: ClassifierState, line: &str) -> (LineKind, ClassifierState) {
    let line = trim_line(line);
    let long_enough = line.len() > 1;

    if state == ClassifierState::InBlockComment {
        let closes = long_enough && (line.starts_with(BLOCK_CLOSE) || line.ends_with(BLOCK_CLOSE));
        let next = if closes {
            ClassifierState::Normal
        } else {
            ClassifierState::InBlockComment
        };
        return (LineKind::Comment, next);
    }

    if line.is_empty() {
        (LineKind::Blank, ClassifierState::Normal)
    } else if long_enough && line.starts_with(LINE_COMMENT) {
        (LineKind::Comment, ClassifierState::Normal)
    } else if long_enough && line.starts_with(BLOCK_OPEN) {
        // `/*/` both opens and "ends with" the close marker; the overlap is
        // accepted and the block is treated as closed.
        if line.ends_with(BLOCK_CLOSE) {
            (LineKind::Comment, ClassifierState::Normal)
        } else {
            (LineKind::Comment, ClassifierState::InBlockComment)
        }
    } else {
        (LineKind::Code, ClassifierState::Normal)
    }
}

/// Stateful wrapper around [`classify_line`] scoped to a single file.
///
/// Create a fresh classifier for every file; state never carries across files.
#[derive(Debug, Default)]
pub struct LineClassifier {
    state: ClassifierState,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Classify the next line of the file.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let (kind, next) = classify_line(self.state, line);
        self.state = next;
        kind
    }
}

/// Split text into line records.
///
/// Records end at `\n`, `\r\n` or a lone `\r`; terminators are not included.
/// A final record without a terminator is yielded if it holds any characters.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(idx) => {
                let line = &self.rest[..idx];
                let after = &self.rest[idx..];
                let skip = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
