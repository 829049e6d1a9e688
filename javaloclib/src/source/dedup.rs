//! Content-based deduplication of discovered files.
//!
//! Every candidate is read once and fingerprinted with BLAKE3. The first
//! path seen for a fingerprint is kept. Content is handed to a callback while
//! it is in memory and dropped afterwards, so only one file is held at a time.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::JavalocError;
use crate::Result;

/// 256-bit BLAKE3 digest of a file's full content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    /// Fingerprint a byte slice.
    pub fn of(content: &[u8]) -> Self {
        Self(blake3::hash(content))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// A discovered file and its raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl SourceFile {
    /// Read a file's full content.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| JavalocError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.content)
    }

    /// Content decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Paths with distinct content, in first-seen order.
#[derive(Debug, Default)]
pub struct UniqueFiles {
    seen: HashSet<Fingerprint>,
    paths: Vec<PathBuf>,
}

impl UniqueFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` unless its fingerprint was already seen.
    ///
    /// Returns `true` if the path became the representative for its fingerprint.
    pub fn insert(&mut self, fingerprint: Fingerprint, path: &Path) -> bool {
        if !self.seen.insert(fingerprint) {
            return false;
        }
        self.paths.push(path.to_path_buf());
        true
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.seen.contains(fingerprint)
    }

    /// Representative paths in first-seen order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

/// Outcome of deduplicating a candidate list.
#[derive(Debug, Default)]
pub struct Deduplicated {
    /// Number of candidates, including unreadable ones
    pub total_files: usize,
    pub unique: UniqueFiles,
}

/// Read and fingerprint every candidate, keeping the first path per content.
///
/// Unreadable candidates still count towards `total_files`.
pub fn deduplicate<I, P>(candidates: I) -> Deduplicated
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    deduplicate_with(candidates, |_| {})
}

/// Like [`deduplicate`], calling `on_unique` with each file that becomes the
/// representative of its content. Duplicates are never passed on.
pub fn deduplicate_with<I, P, F>(candidates: I, mut on_unique: F) -> Deduplicated
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&SourceFile),
{
    let mut result = Deduplicated::default();

    for path in candidates {
        result.total_files += 1;

        let file = match SourceFile::read(path) {
            Ok(file) => file,
            Err(err) => {
                debug!(error = %err, "skipping unreadable file");
                continue;
            }
        };

        if result.unique.insert(file.fingerprint(), &file.path) {
            on_unique(&file);
        } else {
            debug!(path = %file.path.display(), "skipping duplicate content");
        }
    }

    debug!(
        total = result.total_files,
        unique = result.unique.len(),
        "deduplicated files"
    );

    result
}
