//! Weighted Product Model.

use super::{prepare_weights, Method, Scorer, ScoringParams};
use crate::domain::decision::{DecisionMatrix, Direction, WeightVector};
use crate::domain::foundation::DENOMINATOR_EPSILON;
use crate::domain::ranking::RankingError;

/// Weighted geometric mean of normalised values, `exp(sum(w_c * ln(n_c)))`.
///
/// Normalisation: benefit columns `x / max`, cost columns `min / x`.
/// A normalised value of (near) zero forces the whole score to 0.
/// Higher is better.
pub struct Wpm;

impl Wpm {
    fn normalize(matrix: &DecisionMatrix, params: &ScoringParams) -> Vec<Vec<f64>> {
        let columns = matrix.column_count();
        let mut col_min = vec![f64::INFINITY; columns];
        let mut col_max = vec![0.0_f64; columns];
        for row in matrix.rows() {
            for (c, &v) in row.iter().enumerate() {
                col_min[c] = col_min[c].min(v);
                col_max[c] = col_max[c].max(v);
            }
        }

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(c, &v)| match params.direction(c) {
                        Direction::Benefit => {
                            let denom = if col_max[c] > DENOMINATOR_EPSILON {
                                col_max[c]
                            } else {
                                DENOMINATOR_EPSILON
                            };
                            v / denom
                        }
                        Direction::Cost => {
                            if v > DENOMINATOR_EPSILON {
                                col_min[c] / v
                            } else {
                                0.0
                            }
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl Scorer for Wpm {
    fn method(&self) -> Method {
        Method::Wpm
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
                if row.iter().any(|&n| n < DENOMINATOR_EPSILON) {
                    return 0.0;
                }
                let log_sum: f64 = row.iter().zip(&weights).map(|(n, w)| w * n.ln()).sum();
                log_sum.exp()
            })
            .collect())
    }
}
