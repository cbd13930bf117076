//! Ingest error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failures while turning external records into alternatives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed JSON: {0}")]
    Parse(String),

    #[error("Unexpected document shape: {0}")]
    UnexpectedShape(String),

    #[error("Record {index} has no id")]
    MissingId { index: usize },

    #[error("Duplicate alternative id '{0}'")]
    DuplicateId(String),

    #[error(transparent)]
    InvalidId(#[from] ValidationError),
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Parse(err.to_string())
    }
}

impl From<IngestError> for DomainError {
    fn from(err: IngestError) -> Self {
        let domain = DomainError::new(ErrorCode::IngestFailed, err.to_string());
        match err {
            IngestError::Io { path, .. } => domain.with_detail("path", path),
            IngestError::DuplicateId(id) => domain.with_detail("alternative_id", id),
            _ => domain,
        }
    }
}
