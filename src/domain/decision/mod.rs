//! Decision module - the data every ranking method consumes.
//!
//! # Components
//!
//! - `Alternative` / `FieldValue` - caller-owned records and value coercion
//! - `CriterionSpec` - column name, direction, and derived value source
//! - `DecisionMatrix` - validated rectangular numeric matrix
//! - `WeightVector` - non-negative per-criterion weights

mod alternative;
mod criterion;
mod decision_matrix;
mod weights;

pub use alternative::{parse_numeric, parse_numeric_str, parse_range_midpoint, Alternative, FieldValue};
pub use criterion::{CriterionSource, CriterionSpec, Direction};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use weights::WeightVector;
