//! Ranking-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors surfaced by matrix construction, scoring, and the ranking pipeline.
///
/// Degenerate numeric situations (zero spreads, zero weight sums, empty
/// candidate sets) are handled by defined fallbacks and never appear here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// The decision matrix is empty, ragged, or holds a non-finite value.
    #[error("Invalid decision matrix: {reason}")]
    InvalidMatrix { reason: String },

    /// The requested method name is not known.
    #[error("Unsupported scoring method: {0}")]
    UnsupportedMethod(String),

    /// Weight count differs from the criterion count.
    #[error("Expected {expected} weights, got {actual}")]
    WeightMismatch { expected: usize, actual: usize },

    /// A weight is negative or not finite.
    #[error("Weight {index} must be a non-negative finite number, got {value}")]
    InvalidWeight { index: usize, value: f64 },

    /// Preferences failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RankingError {
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        RankingError::InvalidMatrix {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::InvalidMatrix { .. } => ErrorCode::InvalidMatrix,
            RankingError::UnsupportedMethod(_) => ErrorCode::UnsupportedMethod,
            RankingError::WeightMismatch { .. } => ErrorCode::WeightMismatch,
            RankingError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            RankingError::Validation(err) => ErrorCode::from(err),
        }
    }
}

impl From<RankingError> for DomainError {
    fn from(err: RankingError) -> Self {
        let code = err.code();
        let domain = DomainError::new(code, err.to_string());
        match err {
            RankingError::WeightMismatch { expected, actual } => domain
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            RankingError::InvalidWeight { index, .. } => {
                domain.with_detail("index", index.to_string())
            }
            RankingError::UnsupportedMethod(name) => domain.with_detail("method", name),
            _ => domain,
        }
    }
}
