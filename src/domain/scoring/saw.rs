//! Simple Additive Weighting.

use super::{prepare_weights, Method, Scorer, ScoringParams};
use crate::domain::decision::{DecisionMatrix, WeightVector};
use crate::domain::ranking::RankingError;

/// Weighted sum of raw values: `sum(sign_c * w_c * x_c)`.
///
/// No normalisation is applied. Cost columns contribute with a negative
/// weight, so a lower cost raises the score. Higher is better.
pub struct Saw;

impl Scorer for Saw {
    fn method(&self) -> Method {
        Method::Saw
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError> {
        let weights = prepare_weights(matrix, weights)?;
        let signed: Vec<f64> = weights
            .iter()
            .enumerate()
            .map(|(c, w)| if params.direction(c).is_cost() { -w } else { *w })
            .collect();

        Ok(matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(&signed).map(|(x, w)| w * x).sum())
            .collect())
    }
}
