//! Weight vector value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::WEIGHT_SUM_EPSILON;
use crate::domain::ranking::RankingError;

/// One non-negative weight per criterion.
///
/// Weights need not sum to one; methods call [`WeightVector::normalized`].
/// An all-zero vector is accepted and normalises to uniform weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting negative or non-finite entries.
    pub fn new(weights: Vec<f64>) -> Result<Self, RankingError> {
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(RankingError::InvalidWeight { index, value });
        }
        Ok(Self(weights))
    }

    /// Equal weights for `len` criteria.
    pub fn uniform(len: usize) -> Self {
        Self(vec![1.0; len])
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The weights as supplied.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sum of the raw weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Weights divided by their sum; uniform when the sum is below
    /// [`WEIGHT_SUM_EPSILON`].
    pub fn normalized(&self) -> Vec<f64> {
        let n = self.0.len();
        if n == 0 {
            return Vec::new();
        }
        let sum = self.sum();
        if sum < WEIGHT_SUM_EPSILON {
            return vec![1.0 / n as f64; n];
        }
        self.0.iter().map(|w| w / sum).collect()
    }

    /// Checks the vector covers exactly `columns` criteria.
    pub fn ensure_len(&self, columns: usize) -> Result<(), RankingError> {
        if self.0.len() != columns {
            return Err(RankingError::WeightMismatch {
                expected: columns,
                actual: self.0.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = RankingError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}
