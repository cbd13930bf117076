//! Reference Set Method.

use super::{prepare_weights, Method, Scorer, ScoringParams};
use crate::domain::decision::{DecisionMatrix, WeightVector};
use crate::domain::foundation::RANGE_EPSILON;
use crate::domain::ranking::RankingError;

/// Distance to the nadir minus distance to the ideal.
///
/// Each value is mapped onto `[0, 1)` by its distance from the best column
/// extreme, `|x - best| / (|worst - best| + 1e-6)`, so 0 is the ideal and
/// values approaching 1 are the nadir. Both distances are weighted
/// Euclidean. Higher is better.
pub struct Rsm;

impl Rsm {
    fn normalize(matrix: &DecisionMatrix, params: &ScoringParams) -> Vec<Vec<f64>> {
        let extremes: Vec<(f64, f64)> = (0..matrix.column_count())
            .map(|c| {
                let (min, max) = (matrix.column_min(c), matrix.column_max(c));
                let direction = params.direction(c);
                (direction.best(min, max), direction.worst(min, max))
            })
            .collect();

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(c, &x)| {
                        let (best, worst) = extremes[c];
                        (x - best).abs() / ((worst - best).abs() + RANGE_EPSILON)
                    })
                    .collect()
            })
            .collect()
    }
}

impl Scorer for Rsm {
    fn method(&self) -> Method {
        Method::Rsm
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError> {
        let weights = prepare_weights(matrix, weights)?;
        let normalized = Self::normalize(matrix, params);

        Ok(normalized
            .iter()
            .map(|row| {
                let to_ideal: f64 = row.iter().zip(&weights).map(|(n, w)| w * n * n).sum();
                let to_nadir: f64 = row
                    .iter()
                    .zip(&weights)
                    .map(|(n, w)| w * (1.0 - n) * (1.0 - n))
                    .sum();
                to_nadir.sqrt() - to_ideal.sqrt()
            })
            .collect())
    }
}
