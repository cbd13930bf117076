//! Dominance filter configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dominance::{DominanceFilter, DominanceVariant, DuplicatePolicy};

/// Pareto filter settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DominanceConfig {
    /// Algorithm (exhaustive, early_exit, pre_sorted)
    #[serde(default)]
    pub variant: DominanceVariant,

    /// Handling of identical points
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Reference point for pre-sorting; the origin when absent
    #[serde(default)]
    pub ideal_point: Option<Vec<f64>>,
}

impl DominanceConfig {
    /// Builds the configured filter
    pub fn filter(&self) -> DominanceFilter {
        let filter = DominanceFilter::new(self.variant).with_duplicate_policy(self.duplicate_policy);
        match &self.ideal_point {
            Some(ideal) => filter.with_ideal(ideal.clone()),
            None => filter,
        }
    }

    /// Validate dominance configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ideal) = &self.ideal_point {
            if ideal.is_empty() || ideal.iter().any(|v| !v.is_finite()) {
                return Err(ValidationError::InvalidIdealPoint);
            }
        }
        Ok(())
    }
}
