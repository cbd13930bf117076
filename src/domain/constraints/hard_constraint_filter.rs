//! Hard Constraint Filter - eliminates alternatives before any scoring.

use serde::{Deserialize, Serialize};

use super::{HardConstraint, Preferences};
use crate::domain::decision::Alternative;
use crate::domain::foundation::counter_ratio;

/// The first predicate an alternative failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    pub predicate: String,
    pub explanation: String,
}

impl ConstraintViolation {
    fn new(predicate: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            explanation: explanation.into(),
        }
    }
}

/// Conjunctive evaluation of every configured predicate.
pub struct HardConstraintFilter;

impl HardConstraintFilter {
    /// Returns true if the alternative passes every predicate.
    pub fn is_eligible(alternative: &Alternative, preferences: &Preferences) -> bool {
        Self::check(alternative, preferences).is_ok()
    }

    /// Keeps the eligible alternatives, preserving input order.
    pub fn filter<'a>(
        alternatives: impl IntoIterator<Item = &'a Alternative>,
        preferences: &Preferences,
    ) -> Vec<&'a Alternative> {
        alternatives
            .into_iter()
            .filter(|alt| Self::is_eligible(alt, preferences))
            .collect()
    }

    /// Evaluates the predicates in order and reports the first failure.
    ///
    /// Order: per-criterion ceilings, per-criterion floors, required flags,
    /// then `hard_constraints` as listed.
    pub fn check(
        alternative: &Alternative,
        preferences: &Preferences,
    ) -> Result<(), ConstraintViolation> {
        for (field, max) in &preferences.max_value_per_criterion {
            Self::check_max(alternative, field, *max)?;
        }

        for (field, min) in &preferences.min_value_per_criterion {
            Self::check_min(alternative, field, *min)?;
        }

        for flag in &preferences.required_flags {
            Self::check_flag(alternative, flag)?;
        }

        for constraint in &preferences.hard_constraints {
            Self::check_constraint(alternative, constraint)?;
        }

        Ok(())
    }

    fn check_constraint(
        alternative: &Alternative,
        constraint: &HardConstraint,
    ) -> Result<(), ConstraintViolation> {
        match constraint {
            HardConstraint::Max { field, max } => Self::check_max(alternative, field, *max),
            HardConstraint::Min { field, min } => Self::check_min(alternative, field, *min),
            HardConstraint::MinTotal { fields, min } => {
                let total: f64 = fields
                    .iter()
                    .map(|f| alternative.number(f).unwrap_or(0.0))
                    .sum();
                if total < *min {
                    return Err(ConstraintViolation::new(
                        "min_total",
                        format!("{} sum to {}, below {}", fields.join(" + "), total, min),
                    ));
                }
                Ok(())
            }
            HardConstraint::MinRatio {
                numerator,
                complement,
                min,
            } => {
                let ratio = counter_ratio(
                    alternative.number(numerator).unwrap_or(0.0),
                    alternative.number(complement).unwrap_or(0.0),
                );
                if ratio < *min {
                    return Err(ConstraintViolation::new(
                        "min_ratio",
                        format!("{} ratio {:.3} is below {}", numerator, ratio, min),
                    ));
                }
                Ok(())
            }
            HardConstraint::RequiredFlags { flags } => {
                for flag in flags {
                    Self::check_flag(alternative, flag)?;
                }
                Ok(())
            }
            HardConstraint::Contains { field, value } => {
                if !alternative.contains(field, value) {
                    return Err(ConstraintViolation::new(
                        "contains",
                        format!("{} does not contain '{}'", field, value),
                    ));
                }
                Ok(())
            }
        }
    }

    fn check_max(alternative: &Alternative, field: &str, max: f64) -> Result<(), ConstraintViolation> {
        match alternative.number(field) {
            Some(value) if value <= max => Ok(()),
            Some(value) => Err(ConstraintViolation::new(
                "max",
                format!("{} = {} exceeds {}", field, value, max),
            )),
            None => Err(ConstraintViolation::new(
                "max",
                format!("{} is missing", field),
            )),
        }
    }

    fn check_min(alternative: &Alternative, field: &str, min: f64) -> Result<(), ConstraintViolation> {
        let value = alternative.number(field).unwrap_or(0.0);
        if value < min {
            return Err(ConstraintViolation::new(
                "min",
                format!("{} = {} is below {}", field, value, min),
            ));
        }
        Ok(())
    }

    fn check_flag(alternative: &Alternative, flag: &str) -> Result<(), ConstraintViolation> {
        if !alternative.flag(&flag.to_lowercase()) {
            return Err(ConstraintViolation::new(
                "required_flag",
                format!("{} is not set", flag),
            ));
        }
        Ok(())
    }
}
