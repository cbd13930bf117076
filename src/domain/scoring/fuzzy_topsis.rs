//! Fuzzy TOPSIS over triangular fuzzy numbers.
//!
//! Every criterion is minimised. Crisp matrices are lifted to degenerate
//! triangles `(x, x, x)` so the method can sit behind [`Scorer`].

use serde::{Deserialize, Serialize};

use super::{prepare_weights, Method, Scorer, ScoringParams};
use crate::domain::decision::{DecisionMatrix, WeightVector};
use crate::domain::foundation::{guarded_div, DENOMINATOR_EPSILON};
use crate::domain::ranking::RankingError;

/// A triangular fuzzy number `(lower, modal, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularNumber {
    pub l: f64,
    pub m: f64,
    pub u: f64,
}

impl TriangularNumber {
    pub fn new(l: f64, m: f64, u: f64) -> Self {
        Self { l, m, u }
    }

    /// The degenerate triangle of a crisp value.
    pub fn crisp(x: f64) -> Self {
        Self::new(x, x, x)
    }

    fn components(&self) -> [f64; 3] {
        [self.l, self.m, self.u]
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.l), f(self.m), f(self.u))
    }
}

/// Rows of triangular numbers, one per alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatrix {
    rows: Vec<Vec<TriangularNumber>>,
}

impl FuzzyMatrix {
    /// Validates shape and finiteness the same way [`DecisionMatrix`] does.
    pub fn new(rows: Vec<Vec<TriangularNumber>>) -> Result<Self, RankingError> {
        let Some(first) = rows.first() else {
            return Err(RankingError::invalid_matrix("matrix has no rows"));
        };
        let columns = first.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(RankingError::invalid_matrix(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    columns
                )));
            }
            if row
                .iter()
                .flat_map(TriangularNumber::components)
                .any(|v| !v.is_finite())
            {
                return Err(RankingError::invalid_matrix(format!(
                    "row {} contains a non-finite value",
                    i
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Lifts a crisp matrix.
    pub fn from_crisp(matrix: &DecisionMatrix) -> Self {
        Self {
            rows: matrix
                .rows()
                .iter()
                .map(|row| row.iter().map(|&x| TriangularNumber::crisp(x)).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<TriangularNumber>] {
        &self.rows
    }
}

/// Closeness of each alternative to the fuzzy ideal.
///
/// Column `c` is normalised as `min_l(c) / component`, which maps smaller
/// values to larger ones; components at or below zero map to 0. After
/// weighting, the ideal is the component-wise maximum and the anti-ideal the
/// component-wise minimum. Distances are Euclidean over all three components
/// of every criterion. Score is `d- / (d+ + d-)`, higher is better.
pub struct FuzzyTopsis;

impl FuzzyTopsis {
    /// Scores a fuzzy matrix directly.
    pub fn score_fuzzy(
        matrix: &FuzzyMatrix,
        weights: &WeightVector,
    ) -> Result<Vec<f64>, RankingError> {
        weights.ensure_len(matrix.column_count())?;
        let weights = weights.normalized();
        let columns = matrix.column_count();

        let weighted: Vec<Vec<TriangularNumber>> = {
            let min_lower: Vec<f64> = (0..columns)
                .map(|c| {
                    matrix
                        .rows()
                        .iter()
                        .map(|r| r[c].l)
                        .fold(f64::INFINITY, f64::min)
                })
                .collect();

            matrix
                .rows()
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .map(|(c, t)| {
                            t.map(|x| {
                                let n = if x > DENOMINATOR_EPSILON {
                                    min_lower[c] / x
                                } else {
                                    0.0
                                };
                                n * weights[c]
                            })
                        })
                        .collect()
                })
                .collect()
        };

        let mut ideal = vec![[f64::NEG_INFINITY; 3]; columns];
        let mut anti = vec![[f64::INFINITY; 3]; columns];
        for row in &weighted {
            for (c, t) in row.iter().enumerate() {
                for (k, v) in t.components().into_iter().enumerate() {
                    ideal[c][k] = ideal[c][k].max(v);
                    anti[c][k] = anti[c][k].min(v);
                }
            }
        }

        Ok(weighted
            .iter()
            .map(|row| {
                let mut d_plus = 0.0;
                let mut d_minus = 0.0;
                for (c, t) in row.iter().enumerate() {
                    for (k, v) in t.components().into_iter().enumerate() {
                        d_plus += (v - ideal[c][k]).powi(2);
                        d_minus += (v - anti[c][k]).powi(2);
                    }
                }
                let (d_plus, d_minus) = (f64::sqrt(d_plus), f64::sqrt(d_minus));
                guarded_div(d_minus, d_plus + d_minus, 0.0)
            })
            .collect())
    }
}

impl Scorer for FuzzyTopsis {
    fn method(&self) -> Method {
        Method::FuzzyTopsis
    }

    /// Directions in `params` are ignored; every column is minimised.
    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        _params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError> {
        prepare_weights(matrix, weights)?;
        Self::score_fuzzy(&FuzzyMatrix::from_crisp(matrix), weights)
    }
}
