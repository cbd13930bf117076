//! TOPSIS - Technique for Order of Preference by Similarity to Ideal Solution.

use super::{prepare_weights, Method, Scorer, ScoringParams};
use crate::domain::decision::{DecisionMatrix, WeightVector};
use crate::domain::foundation::{guarded_div, DENOMINATOR_EPSILON};
use crate::domain::ranking::RankingError;

/// Relative closeness to the ideal point.
///
/// Columns are vector-normalised and weighted; the ideal takes the best value
/// per column (orientation-aware) and the anti-ideal the worst. The score
/// `d- / (d+ + d-)` lies in `[0, 1]`; 0 when both distances vanish.
/// Higher is better.
pub struct Topsis;

impl Topsis {
    /// Vector-normalises and weights every column.
    fn weighted_normalized(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<Vec<f64>> {
        let norms: Vec<f64> = (0..matrix.column_count())
            .map(|c| matrix.column_norm(c))
            .collect();

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(c, &v)| {
                        let n = if norms[c] > DENOMINATOR_EPSILON {
                            v / norms[c]
                        } else {
                            0.0
                        };
                        n * weights[c]
                    })
                    .collect()
            })
            .collect()
    }

    /// Ideal and anti-ideal points of a weighted, normalised matrix.
    fn reference_points(v: &[Vec<f64>], params: &ScoringParams) -> (Vec<f64>, Vec<f64>) {
        let columns = v.first().map_or(0, Vec::len);
        let mut ideal = Vec::with_capacity(columns);
        let mut anti = Vec::with_capacity(columns);
        for c in 0..columns {
            let min = v.iter().map(|r| r[c]).fold(f64::INFINITY, f64::min);
            let max = v.iter().map(|r| r[c]).fold(f64::NEG_INFINITY, f64::max);
            let direction = params.direction(c);
            ideal.push(direction.best(min, max));
            anti.push(direction.worst(min, max));
        }
        (ideal, anti)
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

impl Scorer for Topsis {
    fn method(&self) -> Method {
        Method::Topsis
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError> {
        let weights = prepare_weights(matrix, weights)?;
        let v = Self::weighted_normalized(matrix, &weights);
        let (ideal, anti) = Self::reference_points(&v, params);

        Ok(v
            .iter()
            .map(|row| {
                let d_plus = euclidean(row, &ideal);
                let d_minus = euclidean(row, &anti);
                guarded_div(d_minus, d_plus + d_minus, 0.0)
            })
            .collect())
    }
}
