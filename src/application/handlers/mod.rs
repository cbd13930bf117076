//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod recommend;

pub use recommend::{RecommendCommand, RecommendHandler, Recommendation};
