//! Constraints module - eligibility filtering ahead of scoring.
//!
//! All functions are pure: an alternative and a `Preferences` record in,
//! a yes/no (or the first violated predicate) out.

mod hard_constraint_filter;
mod preferences;

pub use hard_constraint_filter::{ConstraintViolation, HardConstraintFilter};
pub use preferences::{HardConstraint, Preferences, DEFAULT_TOP_N};
