//! Domain layer containing the decision-analysis core.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, errors, numeric guards)
//! - `decision` - Alternatives, criteria, decision matrix, weights
//! - `constraints` - Preferences and the hard-constraint filter
//! - `dominance` - Pareto-front extraction
//! - `scoring` - MCDA scoring methods
//! - `ranking` - The ranking pipeline and its result type

pub mod constraints;
pub mod decision;
pub mod dominance;
pub mod foundation;
pub mod ranking;
pub mod scoring;
