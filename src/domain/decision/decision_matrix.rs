//! Decision Matrix - the common numeric input of every scoring method.

use serde::{Deserialize, Serialize};

use super::{Alternative, CriterionSpec};
use crate::domain::ranking::RankingError;

/// Rows are alternatives, columns are criteria in caller-defined order.
///
/// Invariants, checked at construction:
/// - at least one row
/// - every row has the same number of columns
/// - every value is finite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl DecisionMatrix {
    /// Creates a matrix, validating its shape.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, RankingError> {
        let columns = match rows.first() {
            Some(first) => first.len(),
            None => return Err(RankingError::invalid_matrix("decision matrix has no rows")),
        };

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(RankingError::invalid_matrix(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    columns
                )));
            }
            if let Some(col) = row.iter().position(|v| !v.is_finite()) {
                return Err(RankingError::invalid_matrix(format!(
                    "row {} column {} is not a finite number",
                    index, col
                )));
            }
        }

        Ok(Self { rows, columns })
    }

    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Reads each alternative through the criteria, in the given column order.
    pub fn from_alternatives(
        alternatives: &[&Alternative],
        criteria: &[CriterionSpec],
    ) -> Result<Self, RankingError> {
        let rows = alternatives
            .iter()
            .map(|alt| criteria.iter().map(|c| c.value_of(alt)).collect())
            .collect();
        Self::new(rows)
    }

    /// Number of alternatives.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// A single row.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Iterates one column top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[index])
    }

    /// Smallest value in a column.
    pub fn column_min(&self, index: usize) -> f64 {
        self.column(index).fold(f64::INFINITY, f64::min)
    }

    /// Largest value in a column.
    pub fn column_max(&self, index: usize) -> f64 {
        self.column(index).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Euclidean norm of a column, `sqrt(sum(x^2))`.
    pub fn column_norm(&self, index: usize) -> f64 {
        self.column(index).map(|v| v * v).sum::<f64>().sqrt()
    }
}

impl<'de> Deserialize<'de> for DecisionMatrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        DecisionMatrix::new(rows).map_err(serde::de::Error::custom)
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row.
    pub fn row(mut self, values: Vec<f64>) -> Self {
        self.rows.push(values);
        self
    }

    /// Appends several rows.
    pub fn rows(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Builds and validates the matrix.
    pub fn build(self) -> Result<DecisionMatrix, RankingError> {
        DecisionMatrix::new(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::CriterionSource;

    #[test]
    fn empty_matrix_is_rejected() {
        let result = DecisionMatrix::new(vec![]);
        assert!(matches!(result, Err(RankingError::InvalidMatrix { .. })));
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let result = DecisionMatrix::builder()
            .row(vec![1.0, 2.0])
            .row(vec![3.0])
            .build();
        match result {
            Err(RankingError::InvalidMatrix { reason }) => {
                assert!(reason.contains("row 1 has 1 columns, expected 2"));
            }
            other => panic!("Expected InvalidMatrix, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let result = DecisionMatrix::new(vec![vec![1.0, f64::NAN]]);
        assert!(matches!(result, Err(RankingError::InvalidMatrix { .. })));
    }

    #[test]
    fn builder_creates_rectangular_matrix() {
        let matrix = DecisionMatrix::builder()
            .row(vec![10.0, 100.0])
            .row(vec![20.0, 50.0])
            .row(vec![15.0, 75.0])
            .build()
            .unwrap();

        assert_eq!(matrix.row_count(), 3);
        assert_eq!(matrix.column_count(), 2);
        assert_eq!(matrix.row(1), &[20.0, 50.0]);
    }

    #[test]
    fn column_statistics() {
        let matrix = DecisionMatrix::new(vec![vec![3.0, 1.0], vec![4.0, 5.0]]).unwrap();
        assert_eq!(matrix.column_min(0), 3.0);
        assert_eq!(matrix.column_max(1), 5.0);
        assert!((matrix.column_norm(0) - 5.0).abs() < 1e-12);
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![1.0, 5.0]);
    }

    #[test]
    fn from_alternatives_follows_criteria_order() {
        let a = Alternative::new("a")
            .with_field("price", 10.0)
            .with_field("positive", 3.0)
            .with_field("negative", 1.0);
        let b = Alternative::new("b").with_field("price", "20");
        let criteria = vec![
            CriterionSpec::benefit("ratio").with_source(CriterionSource::Ratio {
                numerator: "positive".into(),
                complement: "negative".into(),
            }),
            CriterionSpec::cost("price"),
        ];

        let matrix = DecisionMatrix::from_alternatives(&[&a, &b], &criteria).unwrap();
        assert_eq!(matrix.rows(), &[vec![0.75, 10.0], vec![0.0, 20.0]]);
    }

    #[test]
    fn matrix_deserialization_validates_shape() {
        let ok: DecisionMatrix = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(ok.row_count(), 2);

        let ragged = serde_json::from_str::<DecisionMatrix>("[[1.0, 2.0], [3.0]]");
        assert!(ragged.is_err());
    }
}
