//! Error types for region telemetry lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of one region lookup.
///
/// Each variant maps onto exactly one caller-facing status code. Read and
/// parse failures collapse to the same code at the interface but stay
/// distinct here so the operator log can name the cause.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request is missing the 'regions' key")]
    MissingRegionsKey,

    #[error("coordinate '{0}' is not a single path segment")]
    UnsafeCoordinate(String),

    #[error("no region document at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read region document: {0}")]
    Io(#[from] std::io::Error),

    #[error("region document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LookupError {
    /// Caller-facing status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            LookupError::MissingRegionsKey => 400,
            LookupError::UnsafeCoordinate(_) => 400,
            LookupError::NotFound(_) => 404,
            LookupError::Io(_) => 500,
            LookupError::Json(_) => 500,
        }
    }

    /// Whether this failure belongs to the unexpected class that warrants
    /// a full diagnostic trace.
    pub fn is_internal(&self) -> bool {
        self.status() == 500
    }
}
