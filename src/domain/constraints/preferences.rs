//! Preferences - the explicit configuration record for one ranking request.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{AlternativeId, ValidationError};

/// Default number of results returned by a ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// A non-negotiable threshold or membership requirement.
///
/// Evaluated in list order; every predicate must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HardConstraint {
    /// Field value must not exceed `max`. A missing field fails.
    Max { field: String, max: f64 },

    /// Field value must be at least `min`. A missing field reads as 0.0.
    Min { field: String, min: f64 },

    /// Sum of the counters must be at least `min` (e.g. total reviews).
    MinTotal { fields: Vec<String>, min: f64 },

    /// `numerator / (numerator + complement)` must be at least `min`; 0/0 reads as 0.0.
    MinRatio {
        numerator: String,
        complement: String,
        min: f64,
    },

    /// Every flag must be truthy. Flags are looked up lower-cased.
    RequiredFlags { flags: Vec<String> },

    /// The list or text field must contain `value`.
    Contains { field: String, value: String },
}

/// Filtering and truncation options for a ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Ceiling per field; alternatives above it, or missing it, are ineligible.
    #[serde(default)]
    pub max_value_per_criterion: BTreeMap<String, f64>,

    /// Floor per field; missing fields read as 0.0.
    #[serde(default)]
    pub min_value_per_criterion: BTreeMap<String, f64>,

    /// Boolean fields that must all be truthy.
    #[serde(default)]
    pub required_flags: BTreeSet<String>,

    /// Maximum number of ranked results.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Alternatives removed before any filtering (already owned, already played).
    #[serde(default)]
    pub excluded_ids: BTreeSet<AlternativeId>,

    /// Additional predicates, evaluated after the per-criterion maps.
    #[serde(default)]
    pub hard_constraints: Vec<HardConstraint>,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_value_per_criterion: BTreeMap::new(),
            min_value_per_criterion: BTreeMap::new(),
            required_flags: BTreeSet::new(),
            top_n: DEFAULT_TOP_N,
            excluded_ids: BTreeSet::new(),
            hard_constraints: Vec::new(),
        }
    }
}

impl Preferences {
    /// Sets a ceiling for a field.
    pub fn with_max(mut self, field: impl Into<String>, max: f64) -> Self {
        self.max_value_per_criterion.insert(field.into(), max);
        self
    }

    /// Sets a floor for a field.
    pub fn with_min(mut self, field: impl Into<String>, min: f64) -> Self {
        self.min_value_per_criterion.insert(field.into(), min);
        self
    }

    /// Requires a flag to be truthy.
    pub fn with_required_flag(mut self, flag: impl Into<String>) -> Self {
        self.required_flags.insert(flag.into());
        self
    }

    /// Limits the number of results.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Excludes an alternative.
    pub fn with_excluded(mut self, id: impl Into<AlternativeId>) -> Self {
        self.excluded_ids.insert(id.into());
        self
    }

    /// Appends a hard constraint.
    pub fn with_constraint(mut self, constraint: HardConstraint) -> Self {
        self.hard_constraints.push(constraint);
        self
    }

    /// Checks the options once, at the pipeline boundary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_n == 0 {
            return Err(ValidationError::out_of_range(
                "top_n",
                1.0,
                usize::MAX as f64,
                0.0,
            ));
        }
        let thresholds = self
            .max_value_per_criterion
            .iter()
            .chain(self.min_value_per_criterion.iter());
        for (field, value) in thresholds {
            if field.trim().is_empty() {
                return Err(ValidationError::empty_field("criterion"));
            }
            if value.is_nan() {
                return Err(ValidationError::invalid_format(field.clone(), "threshold is NaN"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_recommender_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.top_n, 10);
        assert!(prefs.excluded_ids.is_empty());
        assert!(prefs.hard_constraints.is_empty());
    }

    #[test]
    fn zero_top_n_fails_validation() {
        let prefs = Preferences::default().with_top_n(0);
        assert!(matches!(
            prefs.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn nan_threshold_fails_validation() {
        let prefs = Preferences::default().with_max("price", f64::NAN);
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "max_value_per_criterion": {"price": 100.0},
            "required_flags": ["windows"],
            "excluded_ids": ["730"],
            "hard_constraints": [
                {"kind": "min_ratio", "numerator": "positive", "complement": "negative", "min": 0.75},
                {"kind": "contains", "field": "categories", "value": "Multi-player"}
            ]
        }"#;

        let prefs: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.top_n, DEFAULT_TOP_N);
        assert_eq!(prefs.max_value_per_criterion.get("price"), Some(&100.0));
        assert!(prefs.excluded_ids.contains(&AlternativeId::new("730")));
        assert_eq!(prefs.hard_constraints.len(), 2);
        assert!(prefs.validate().is_ok());
    }
}
