//! Dominance module - Pareto-optimal subset extraction.
//!
//! Points are minimised on every coordinate. Three interchangeable
//! algorithms are provided; see [`DominanceVariant`].

mod dominance_filter;

pub use dominance_filter::{
    dominates, DominanceFilter, DominanceReport, DominanceVariant, DuplicatePolicy, ParetoFront,
};

use crate::domain::decision::{DecisionMatrix, Direction};

/// Re-orients a decision matrix so every column is minimised.
///
/// Benefit columns are negated; cost columns pass through. Columns without a
/// listed direction are treated as cost.
pub fn minimization_view(matrix: &DecisionMatrix, directions: &[Direction]) -> Vec<Vec<f64>> {
    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(k, &v)| match directions.get(k) {
                    Some(Direction::Benefit) => -v,
                    _ => v,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimization_view_negates_benefit_columns() {
        let matrix = DecisionMatrix::new(vec![vec![2.0, 10.0], vec![3.0, 5.0]]).unwrap();
        let view = minimization_view(&matrix, &[Direction::Benefit]);
        assert_eq!(view, vec![vec![-2.0, 10.0], vec![-3.0, 5.0]]);
    }

    #[test]
    fn benefit_orientation_changes_the_front() {
        // higher RAM is better, lower price is better
        let matrix = DecisionMatrix::new(vec![
            vec![16.0, 8299.0],
            vec![8.0, 4399.0],
            vec![8.0, 5999.0],
        ])
        .unwrap();
        let view = minimization_view(&matrix, &[Direction::Benefit, Direction::Cost]);
        let front = DominanceFilter::default().front(&view);
        assert_eq!(front.sorted_indices(), vec![0, 1]);
    }
}
