//! Alternative Source Port - supplies candidate alternatives to the core.
//!
//! Loading (files, archives, network) lives entirely outside the domain.
//! The ranking core only ever sees the `Alternative` values a source returns.

use crate::domain::decision::Alternative;
use crate::domain::foundation::DomainError;

/// Port for loading the candidate set.
///
/// # Contract
///
/// Implementations must:
/// - Return alternatives in a stable order (ties in the ranking keep it)
/// - Give every alternative a non-empty, unique id
/// - Report unreadable input as `ErrorCode::IngestFailed`
pub trait AlternativeSource: Send + Sync {
    /// Loads every alternative the source holds.
    fn load(&self) -> Result<Vec<Alternative>, DomainError>;
}
