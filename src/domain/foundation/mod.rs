//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, numeric guards, and error types
//! that form the vocabulary of the decision engine.

mod errors;
mod ids;
mod numeric;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AlternativeId;
pub use numeric::{
    counter_ratio, guarded_div, DENOMINATOR_EPSILON, RANGE_EPSILON, WEIGHT_SUM_EPSILON,
};
