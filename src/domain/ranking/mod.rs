//! Ranking module - the end-to-end filter, score, sort, truncate pipeline.
//!
//! # Components
//!
//! - `RankingPipeline` - runs the fixed sequence of steps for one request
//! - `RankedResult` - one entry of the output, best first
//! - `RankingError` - every failure the core can surface

mod errors;
mod pipeline;
mod ranked_result;

pub use errors::RankingError;
pub use pipeline::{RankingPipeline, ScoredCandidates};
pub use ranked_result::RankedResult;
