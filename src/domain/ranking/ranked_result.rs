//! Ranked result value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AlternativeId;

/// One entry of a ranking, ordered best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub alternative_id: AlternativeId,
    pub score: f64,
    /// 1-based position in the ranking.
    pub rank_position: usize,
}

impl RankedResult {
    pub fn new(alternative_id: AlternativeId, score: f64, rank_position: usize) -> Self {
        Self {
            alternative_id,
            score,
            rank_position,
        }
    }

    /// Score rounded to the given number of decimal places.
    pub fn rounded_score(&self, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (self.score * factor).round() / factor
    }
}
