//! VIKOR compromise ranking.

use super::{prepare_weights, Method, Scorer, ScoringParams};
use crate::domain::decision::{DecisionMatrix, WeightVector};
use crate::domain::foundation::DENOMINATOR_EPSILON;
use crate::domain::ranking::RankingError;

/// Weight of the group-utility term in `Q`; `1 - VIKOR_V` weights regret.
pub const VIKOR_V: f64 = 0.5;

/// Compromise between group utility `S` and individual regret `R`.
///
/// For every cell the weighted gap to the best column value is
/// `w_c * |f*_c - x| / |f*_c - f-_c|`; `S` sums the gaps of a row and `R`
/// takes the largest. `Q` blends both, rescaled to `[0, 1]`.
/// Lower is better: the row with `Q = 0` ranks first.
pub struct Vikor;

/// Per-row intermediate values.
#[derive(Debug, Clone, PartialEq)]
pub struct VikorComponents {
    pub group_utility: Vec<f64>,
    pub individual_regret: Vec<f64>,
}

impl Vikor {
    /// Computes `S` and `R` for every row.
    pub fn components(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<VikorComponents, RankingError> {
        let weights = prepare_weights(matrix, weights)?;

        let extremes: Vec<(f64, f64)> = (0..matrix.column_count())
            .map(|c| {
                let (min, max) = (matrix.column_min(c), matrix.column_max(c));
                let direction = params.direction(c);
                (direction.best(min, max), direction.worst(min, max))
            })
            .collect();

        let mut group_utility = Vec::with_capacity(matrix.row_count());
        let mut individual_regret = Vec::with_capacity(matrix.row_count());
        for row in matrix.rows() {
            let mut s = 0.0;
            let mut r = 0.0_f64;
            for (c, &x) in row.iter().enumerate() {
                let (best, worst) = extremes[c];
                let spread = (best - worst).abs();
                let denom = if spread > DENOMINATOR_EPSILON { spread } else { 1.0 };
                let gap = weights[c] * (best - x).abs() / denom;
                s += gap;
                r = r.max(gap);
            }
            group_utility.push(s);
            individual_regret.push(r);
        }

        Ok(VikorComponents {
            group_utility,
            individual_regret,
        })
    }
}

/// `(x - min) / (max - min)`, or 0 when the spread vanishes.
fn rescale(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;
    values
        .iter()
        .map(|v| {
            if spread > DENOMINATOR_EPSILON {
                (v - min) / spread
            } else {
                0.0
            }
        })
        .collect()
}

impl Scorer for Vikor {
    fn method(&self) -> Method {
        Method::Vikor
    }

    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError> {
        let components = Self::components(matrix, weights, params)?;
        let s = rescale(&components.group_utility);
        let r = rescale(&components.individual_regret);

        Ok(s.iter()
            .zip(&r)
            .map(|(fs, fr)| VIKOR_V * fs + (1.0 - VIKOR_V) * fr)
            .collect())
    }
}
