//! Scoring module - interchangeable MCDA methods.
//!
//! Every method turns a [`DecisionMatrix`] and a [`WeightVector`] into one
//! score per row. Methods are pure: identical inputs give bit-identical
//! scores.
//!
//! # Components
//!
//! - `Saw` - weighted sum of raw values, cost columns negated
//! - `Wpm` - weighted geometric mean of max/min-normalised values
//! - `Topsis` - relative closeness to ideal vs anti-ideal
//! - `Vikor` - compromise of group utility and individual regret (lower is better)
//! - `Rsm` - distance to nadir minus distance to ideal
//! - `Uta` - piecewise-linear additive utility
//! - `FuzzyTopsis` - TOPSIS over triangular fuzzy numbers
//!
//! Columns default to cost orientation when `ScoringParams::directions`
//! does not cover them.

mod fuzzy_topsis;
mod rsm;
mod saw;
mod topsis;
mod uta;
mod vikor;
mod wpm;

pub use fuzzy_topsis::{FuzzyMatrix, FuzzyTopsis, TriangularNumber};
pub use rsm::Rsm;
pub use saw::Saw;
pub use topsis::Topsis;
pub use uta::Uta;
pub use vikor::{Vikor, VikorComponents, VIKOR_V};
pub use wpm::Wpm;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::decision::{CriterionSpec, DecisionMatrix, Direction, WeightVector};
use crate::domain::ranking::RankingError;

/// Default number of utility segments for UTA.
pub const DEFAULT_UTA_SEGMENTS: usize = 5;

/// Sort order implied by a method's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingDirection {
    /// Higher scores rank first.
    Descending,
    /// Lower scores rank first.
    Ascending,
}

/// Method-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Orientation per column; missing entries are cost.
    #[serde(default)]
    pub directions: Vec<Direction>,

    /// Number of equal-width utility segments used by UTA.
    #[serde(default = "default_uta_segments")]
    pub uta_segments: usize,
}

fn default_uta_segments() -> usize {
    DEFAULT_UTA_SEGMENTS
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            directions: Vec::new(),
            uta_segments: DEFAULT_UTA_SEGMENTS,
        }
    }
}

impl ScoringParams {
    /// Takes column orientation from the criteria.
    pub fn from_criteria(criteria: &[CriterionSpec]) -> Self {
        Self {
            directions: criteria.iter().map(|c| c.direction).collect(),
            ..Self::default()
        }
    }

    /// Sets the column orientation.
    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    /// Sets the UTA segment count.
    pub fn with_uta_segments(mut self, segments: usize) -> Self {
        self.uta_segments = segments;
        self
    }

    /// Orientation of one column.
    pub fn direction(&self, column: usize) -> Direction {
        self.directions.get(column).copied().unwrap_or_default()
    }
}

/// The common interface of every scoring method.
pub trait Scorer: Send + Sync {
    /// Which method this is.
    fn method(&self) -> Method;

    /// Computes one score per matrix row.
    ///
    /// # Errors
    ///
    /// Returns `RankingError::WeightMismatch` when the weights do not cover
    /// exactly the matrix columns. Degenerate numeric cases are not errors.
    fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError>;
}

/// Checks the weight count and returns normalised weights.
pub(crate) fn prepare_weights(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
) -> Result<Vec<f64>, RankingError> {
    weights.ensure_len(matrix.column_count())?;
    Ok(weights.normalized())
}

/// Tagged selector over the scoring methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Method {
    Saw,
    Wpm,
    #[default]
    Topsis,
    Vikor,
    Rsm,
    Uta,
    FuzzyTopsis,
}

impl Method {
    /// Every supported method.
    pub const ALL: [Method; 7] = [
        Method::Saw,
        Method::Wpm,
        Method::Topsis,
        Method::Vikor,
        Method::Rsm,
        Method::Uta,
        Method::FuzzyTopsis,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Saw => "SAW",
            Method::Wpm => "WPM",
            Method::Topsis => "TOPSIS",
            Method::Vikor => "VIKOR",
            Method::Rsm => "RSM",
            Method::Uta => "UTA",
            Method::FuzzyTopsis => "FUZZY_TOPSIS",
        }
    }

    /// VIKOR ranks ascending; every other method descending.
    pub fn ranking_direction(&self) -> RankingDirection {
        match self {
            Method::Vikor => RankingDirection::Ascending,
            _ => RankingDirection::Descending,
        }
    }

    /// Decimal places used when scores are displayed.
    pub fn display_precision(&self) -> u32 {
        match self {
            Method::Vikor => 4,
            _ => 3,
        }
    }

    /// The implementation behind this selector.
    pub fn scorer(&self) -> &'static dyn Scorer {
        match self {
            Method::Saw => &Saw,
            Method::Wpm => &Wpm,
            Method::Topsis => &Topsis,
            Method::Vikor => &Vikor,
            Method::Rsm => &Rsm,
            Method::Uta => &Uta,
            Method::FuzzyTopsis => &FuzzyTopsis,
        }
    }

    /// Scores the matrix with this method.
    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        params: &ScoringParams,
    ) -> Result<Vec<f64>, RankingError> {
        self.scorer().score(matrix, weights, params)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Method {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SAW" => Ok(Method::Saw),
            "WPM" => Ok(Method::Wpm),
            "TOPSIS" => Ok(Method::Topsis),
            "VIKOR" => Ok(Method::Vikor),
            "RSM" => Ok(Method::Rsm),
            "UTA" => Ok(Method::Uta),
            "FUZZY_TOPSIS" => Ok(Method::FuzzyTopsis),
            _ => Err(RankingError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for Method {
    type Error = RankingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_matrix() -> DecisionMatrix {
        DecisionMatrix::new(vec![
            vec![10.0, 100.0],
            vec![20.0, 50.0],
            vec![15.0, 75.0],
        ])
        .unwrap()
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("saw".parse::<Method>().unwrap(), Method::Saw);
        assert_eq!("Vikor".parse::<Method>().unwrap(), Method::Vikor);
        assert_eq!("fuzzy-topsis".parse::<Method>().unwrap(), Method::FuzzyTopsis);
    }

    #[test]
    fn unknown_method_is_unsupported() {
        assert_eq!(
            "electre".parse::<Method>(),
            Err(RankingError::UnsupportedMethod("electre".to_string()))
        );
    }

    #[test]
    fn only_vikor_ranks_ascending() {
        for method in Method::ALL {
            let expected = if method == Method::Vikor {
                RankingDirection::Ascending
            } else {
                RankingDirection::Descending
            };
            assert_eq!(method.ranking_direction(), expected, "{}", method);
        }
    }

    #[test]
    fn scorer_reports_its_own_method() {
        for method in Method::ALL {
            assert_eq!(method.scorer().method(), method);
        }
    }

    #[test]
    fn every_method_returns_one_score_per_row() {
        let matrix = spec_matrix();
        let weights = WeightVector::new(vec![0.5, 0.5]).unwrap();
        for method in Method::ALL {
            let scores = method.score(&matrix, &weights, &ScoringParams::default()).unwrap();
            assert_eq!(scores.len(), 3, "{}", method);
            assert!(scores.iter().all(|s| s.is_finite()), "{}", method);
        }
    }

    #[test]
    fn every_method_rejects_weight_mismatch() {
        let matrix = spec_matrix();
        let weights = WeightVector::uniform(3);
        for method in Method::ALL {
            assert!(matches!(
                method.score(&matrix, &weights, &ScoringParams::default()),
                Err(RankingError::WeightMismatch { expected: 2, actual: 3 })
            ));
        }
    }

    #[test]
    fn every_method_is_deterministic() {
        let matrix = spec_matrix();
        let weights = WeightVector::new(vec![0.3, 0.9]).unwrap();
        let params = ScoringParams::default().with_directions(vec![Direction::Benefit, Direction::Cost]);
        for method in Method::ALL {
            let first = method.score(&matrix, &weights, &params).unwrap();
            let second = method.score(&matrix, &weights, &params).unwrap();
            let bits = |v: &[f64]| v.iter().map(|s| s.to_bits()).collect::<Vec<_>>();
            assert_eq!(bits(&first), bits(&second), "{}", method);
        }
    }

    #[test]
    fn zero_weights_behave_like_uniform_weights() {
        let matrix = spec_matrix();
        let zero = WeightVector::new(vec![0.0, 0.0]).unwrap();
        let uniform = WeightVector::uniform(2);
        for method in Method::ALL {
            let params = ScoringParams::default();
            assert_eq!(
                method.score(&matrix, &zero, &params).unwrap(),
                method.score(&matrix, &uniform, &params).unwrap(),
                "{}",
                method
            );
        }
    }

    #[test]
    fn params_default_columns_to_cost() {
        let params = ScoringParams::default().with_directions(vec![Direction::Benefit]);
        assert_eq!(params.direction(0), Direction::Benefit);
        assert_eq!(params.direction(5), Direction::Cost);
        assert_eq!(params.uta_segments, DEFAULT_UTA_SEGMENTS);
    }

    #[test]
    fn method_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Method::FuzzyTopsis).unwrap(), "\"FUZZY_TOPSIS\"");
        let parsed: Method = serde_json::from_str("\"wpm\"").unwrap();
        assert_eq!(parsed, Method::Wpm);
        assert!(serde_json::from_str::<Method>("\"ahp\"").is_err());
    }
}
