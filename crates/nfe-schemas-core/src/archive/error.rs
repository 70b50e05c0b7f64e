//! Error types for archive fetch and extraction.

use crate::http::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while unpacking an in-memory ZIP.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Body is not a readable ZIP container.
    #[error("not a valid zip archive")]
    Archive(#[from] zip::result::ZipError),

    /// Entry name is absolute or climbs out of the destination with `..`.
    #[error("archive entry escapes destination: {0:?}")]
    UnsafePath(String),

    #[error("write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of one fetch-and-extract step.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Nothing was written; the archive can be skipped.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}
