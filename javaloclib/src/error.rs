//! Error types for javaloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading sources.
///
/// The counting pipeline is best-effort: these errors are logged and the
/// offending file is skipped. Only the single-file helpers surface them.
#[derive(Error, Debug)]
pub enum JavalocError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
