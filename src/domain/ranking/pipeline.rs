//! Ranking Pipeline - exclusion, filtering, scoring, ordering, truncation.
//!
//! The steps always run in this order:
//!
//! 1. drop excluded ids
//! 2. apply the hard-constraint filter
//! 3. return an empty ranking if nothing survived
//! 4. build the decision matrix in criterion order
//! 5. score with the selected method
//! 6. stable-sort by the method's ranking direction
//! 7. truncate to `top_n`
//!
//! Inputs are never mutated.

use std::cmp::Ordering;

use tracing::{debug, info};

use super::{RankedResult, RankingError};
use crate::domain::constraints::{HardConstraintFilter, Preferences};
use crate::domain::decision::{Alternative, CriterionSpec, DecisionMatrix, WeightVector};
use crate::domain::scoring::{Method, RankingDirection, ScoringParams};

/// Scored survivors of the filter, before truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidates<'a> {
    /// Survivors in input order.
    pub alternatives: Vec<&'a Alternative>,
    /// The matrix that was scored, one row per survivor.
    pub matrix: Option<DecisionMatrix>,
    /// One score per survivor.
    pub scores: Vec<f64>,
}

/// Ranks alternatives against a fixed criterion list.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    criteria: Vec<CriterionSpec>,
    params: ScoringParams,
}

impl RankingPipeline {
    /// Creates a pipeline whose column orientation follows the criteria.
    pub fn new(criteria: Vec<CriterionSpec>) -> Self {
        let params = ScoringParams::from_criteria(&criteria);
        Self { criteria, params }
    }

    /// Overrides the UTA segment count.
    pub fn with_uta_segments(mut self, segments: usize) -> Self {
        self.params = self.params.with_uta_segments(segments);
        self
    }

    pub fn criteria(&self) -> &[CriterionSpec] {
        &self.criteria
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Runs steps 1-5 and returns the survivors with their scores.
    pub fn score<'a>(
        &self,
        alternatives: &'a [Alternative],
        preferences: &Preferences,
        method: Method,
        weights: &WeightVector,
    ) -> Result<ScoredCandidates<'a>, RankingError> {
        preferences.validate()?;
        weights.ensure_len(self.criteria.len())?;

        let remaining = alternatives
            .iter()
            .filter(|alt| !preferences.excluded_ids.contains(&alt.id));
        let eligible = HardConstraintFilter::filter(remaining, preferences);

        debug!(
            total = alternatives.len(),
            eligible = eligible.len(),
            excluded = preferences.excluded_ids.len(),
            "Hard constraints applied"
        );

        if eligible.is_empty() {
            info!(method = %method, "No alternatives satisfy the constraints");
            return Ok(ScoredCandidates {
                alternatives: eligible,
                matrix: None,
                scores: Vec::new(),
            });
        }

        let matrix = DecisionMatrix::from_alternatives(&eligible, &self.criteria)?;
        let scores = method.score(&matrix, weights, &self.params)?;

        Ok(ScoredCandidates {
            alternatives: eligible,
            matrix: Some(matrix),
            scores,
        })
    }

    /// Produces the ranking, best first, at most `preferences.top_n` long.
    ///
    /// # Errors
    ///
    /// - `Validation` if the preferences are malformed
    /// - `WeightMismatch` if the weights do not match the criteria
    /// - `InvalidMatrix` if a criterion evaluates to a non-finite value
    pub fn rank(
        &self,
        alternatives: &[Alternative],
        preferences: &Preferences,
        method: Method,
        weights: &WeightVector,
    ) -> Result<Vec<RankedResult>, RankingError> {
        let scored = self.score(alternatives, preferences, method, weights)?;
        Ok(Self::rank_candidates(&scored, method, preferences.top_n))
    }

    /// Runs steps 6-7 over already-scored candidates.
    pub fn rank_candidates(
        scored: &ScoredCandidates<'_>,
        method: Method,
        top_n: usize,
    ) -> Vec<RankedResult> {
        let mut order: Vec<usize> = (0..scored.scores.len()).collect();
        let direction = method.ranking_direction();
        order.sort_by(|&a, &b| compare_scores(scored.scores[a], scored.scores[b], direction));
        order.truncate(top_n);

        let ranking: Vec<RankedResult> = order
            .into_iter()
            .enumerate()
            .map(|(position, i)| {
                RankedResult::new(
                    scored.alternatives[i].id.clone(),
                    scored.scores[i],
                    position + 1,
                )
            })
            .collect();

        debug!(
            method = %method,
            returned = ranking.len(),
            top_n = top_n,
            "Ranking complete"
        );

        ranking
    }
}

/// Orders two scores so the better one comes first.
fn compare_scores(a: f64, b: f64, direction: RankingDirection) -> Ordering {
    match direction {
        RankingDirection::Descending => b.total_cmp(&a),
        RankingDirection::Ascending => a.total_cmp(&b),
    }
}
