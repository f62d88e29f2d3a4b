use std::path::PathBuf;

use thiserror::Error;

/// Why a single document did not produce a page. None of these stop a batch.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("no slug in metadata block")]
    MissingSlug,
    #[error("slug {0:?} is not a single path segment of [A-Za-z0-9_-]")]
    InvalidSlug(String),
    #[error("slug {0:?} already rendered from an earlier document")]
    DuplicateSlug(String),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Skips are expected; everything else counts as a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, DocumentError::MissingSlug)
    }
}
