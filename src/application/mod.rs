//! Application layer - use cases over the domain core.

pub mod handlers;

pub use handlers::{RecommendCommand, RecommendHandler, Recommendation};
