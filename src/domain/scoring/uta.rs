//! UTA - additive piecewise-linear utility.

use super::{prepare_weights, Method, Scorer, ScoringParams};
use crate::domain::decision::{DecisionMatrix, WeightVector};
use crate::domain::foundation::RANGE_EPSILON;
use crate::domain::ranking::RankingError;

/// Weighted sum of per-criterion segment utilities.
///
/// Each column is min-max normalised by distance from its best extreme,
/// then split into `k` equal segments whose utility falls linearly from 1
/// (segment 0) to `1/k` (segment `k - 1`). Higher is better.
pub struct Uta;

impl Uta {
    /// The `k + 1` breakpoint utilities, linearly spaced from 1 down to 0.
    pub fn utility_breakpoints(segments: usize) -> Vec<f64> {
        let k = segments.max(1);
        let step = -1.0 / k as f64;
        (0..=k).map(|i| 1.0 + i as f64 * step).collect()
    }

    /// Segment index of a normalised value, clamped to `[0, k - 1]`.
    fn segment_index(normalized: f64, segments: usize) -> usize {
        let raw = (normalized * segments as f64).floor();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(segments - 1)
        }
    }
}

impl Scorer for Uta {
    fn method(&self) -> Method {
        Method::Uta
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError> {
        let weights = prepare_weights(matrix, weights)?;
        let segments = params.uta_segments.max(1);
        let breakpoints = Self::utility_breakpoints(segments);

        let extremes: Vec<(f64, f64)> = (0..matrix.column_count())
            .map(|c| {
                let (min, max) = (matrix.column_min(c), matrix.column_max(c));
                let direction = params.direction(c);
                (direction.best(min, max), direction.worst(min, max))
            })
            .collect();

        Ok(matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(c, &x)| {
                        let (best, worst) = extremes[c];
                        let n = (x - best).abs() / ((worst - best).abs() + RANGE_EPSILON);
                        weights[c] * breakpoints[Self::segment_index(n, segments)]
                    })
                    .sum()
            })
            .collect())
    }
}
