//! Criterion specifications and derived criterion sources.

use serde::{Deserialize, Serialize};

use super::Alternative;
use crate::domain::foundation::counter_ratio;

/// Whether a criterion is maximised (benefit) or minimised (cost).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Benefit,
    #[default]
    Cost,
}

impl Direction {
    /// Returns true for cost (minimised) criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, Direction::Cost)
    }

    /// Picks the better of two column extremes for this direction.
    pub fn best(&self, min: f64, max: f64) -> f64 {
        match self {
            Direction::Benefit => max,
            Direction::Cost => min,
        }
    }

    /// Picks the worse of two column extremes for this direction.
    pub fn worst(&self, min: f64, max: f64) -> f64 {
        match self {
            Direction::Benefit => min,
            Direction::Cost => max,
        }
    }
}

/// How a criterion's numeric value is obtained from an alternative's fields.
///
/// Missing fields read as 0.0 in every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CriterionSource {
    /// The coerced value of a single field.
    Field { field: String },

    /// `numerator / (numerator + complement)`, 0/0 reads as 0.0.
    Ratio { numerator: String, complement: String },

    /// Sum of several numeric fields.
    Sum { fields: Vec<String> },

    /// `log10(x * scale + 1)` when `x * scale > 0`, otherwise 0.0.
    Log10 { field: String, scale: f64 },

    /// `x / cap` below the cap, 1.0 at or above it.
    Capped { field: String, cap: f64 },

    /// 1.0 when the field contains `value`, otherwise 0.0.
    Membership { field: String, value: String },

    /// Fraction of `wanted` entries present in the field; 0.0 when nothing is wanted.
    MatchFraction { field: String, wanted: Vec<String> },
}

impl CriterionSource {
    /// Computes the criterion value for one alternative.
    pub fn evaluate(&self, alternative: &Alternative) -> f64 {
        let number = |name: &str| alternative.number(name).unwrap_or(0.0);

        match self {
            CriterionSource::Field { field } => number(field),
            CriterionSource::Ratio {
                numerator,
                complement,
            } => counter_ratio(number(numerator), number(complement)),
            CriterionSource::Sum { fields } => fields.iter().map(|f| number(f)).sum(),
            CriterionSource::Log10 { field, scale } => {
                let scaled = number(field) * scale;
                if scaled > 0.0 {
                    (scaled + 1.0).log10()
                } else {
                    0.0
                }
            }
            CriterionSource::Capped { field, cap } => {
                let value = number(field);
                if value < *cap {
                    value / cap
                } else {
                    1.0
                }
            }
            CriterionSource::Membership { field, value } => {
                if alternative.contains(field, value) {
                    1.0
                } else {
                    0.0
                }
            }
            CriterionSource::MatchFraction { field, wanted } => {
                if wanted.is_empty() {
                    return 0.0;
                }
                let matched = wanted
                    .iter()
                    .filter(|w| alternative.contains(field, w))
                    .count();
                matched as f64 / wanted.len() as f64
            }
        }
    }
}

/// One column of the decision matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub name: String,
    #[serde(default)]
    pub direction: Direction,
    /// Derivation of the value; `None` reads the field named like the criterion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CriterionSource>,
}

impl CriterionSpec {
    /// A benefit criterion read from the field of the same name.
    pub fn benefit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Benefit,
            source: None,
        }
    }

    /// A cost criterion read from the field of the same name.
    pub fn cost(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Cost,
            source: None,
        }
    }

    /// Replaces the value source.
    pub fn with_source(mut self, source: CriterionSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Reads this criterion's value from an alternative.
    pub fn value_of(&self, alternative: &Alternative) -> f64 {
        match &self.source {
            Some(source) => source.evaluate(alternative),
            None => alternative.number(&self.name).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Alternative {
        Alternative::new("g1")
            .with_field("positive", 90.0)
            .with_field("negative", 10.0)
            .with_field("estimated_owners", "20000 - 50000")
            .with_field("median_playtime_forever", 1500.0)
            .with_field("full_audio_languages", vec!["English", "Polish"])
            .with_field("tags", vec!["Indie", "RPG"])
    }

    #[test]
    fn direction_defaults_to_cost() {
        assert_eq!(Direction::default(), Direction::Cost);
        assert!(Direction::default().is_cost());
    }

    #[test]
    fn direction_picks_extremes() {
        assert_eq!(Direction::Benefit.best(1.0, 5.0), 5.0);
        assert_eq!(Direction::Cost.best(1.0, 5.0), 1.0);
        assert_eq!(Direction::Benefit.worst(1.0, 5.0), 1.0);
        assert_eq!(Direction::Cost.worst(1.0, 5.0), 5.0);
    }

    #[test]
    fn plain_criterion_reads_named_field() {
        let alt = Alternative::new("l1").with_field("price", "4399");
        assert_eq!(CriterionSpec::cost("price").value_of(&alt), 4399.0);
        assert_eq!(CriterionSpec::cost("ram_gb").value_of(&alt), 0.0);
    }

    #[test]
    fn ratio_source_computes_share() {
        let source = CriterionSource::Ratio {
            numerator: "positive".into(),
            complement: "negative".into(),
        };
        assert!((source.evaluate(&game()) - 0.9).abs() < 1e-12);
        assert_eq!(source.evaluate(&Alternative::new("empty")), 0.0);
    }

    #[test]
    fn sum_source_adds_fields() {
        let source = CriterionSource::Sum {
            fields: vec!["positive".into(), "negative".into()],
        };
        assert_eq!(source.evaluate(&game()), 100.0);
    }

    #[test]
    fn log10_source_scales_owner_counts() {
        let source = CriterionSource::Log10 {
            field: "estimated_owners".into(),
            scale: 0.2,
        };
        let expected = (35_000.0_f64 * 0.2 + 1.0).log10();
        assert!((source.evaluate(&game()) - expected).abs() < 1e-12);
        assert_eq!(source.evaluate(&Alternative::new("none")), 0.0);
    }

    #[test]
    fn capped_source_saturates() {
        let source = CriterionSource::Capped {
            field: "median_playtime_forever".into(),
            cap: 6000.0,
        };
        assert!((source.evaluate(&game()) - 0.25).abs() < 1e-12);

        let long = Alternative::new("g2").with_field("median_playtime_forever", 9000.0);
        assert_eq!(source.evaluate(&long), 1.0);
    }

    #[test]
    fn membership_source_is_indicator() {
        let polish = CriterionSource::Membership {
            field: "full_audio_languages".into(),
            value: "Polish".into(),
        };
        let german = CriterionSource::Membership {
            field: "full_audio_languages".into(),
            value: "German".into(),
        };
        assert_eq!(polish.evaluate(&game()), 1.0);
        assert_eq!(german.evaluate(&game()), 0.0);
    }

    #[test]
    fn match_fraction_counts_wanted_tags() {
        let source = CriterionSource::MatchFraction {
            field: "tags".into(),
            wanted: vec!["RPG".into(), "Strategy".into()],
        };
        assert!((source.evaluate(&game()) - 0.5).abs() < 1e-12);

        let nothing_wanted = CriterionSource::MatchFraction {
            field: "tags".into(),
            wanted: vec![],
        };
        assert_eq!(nothing_wanted.evaluate(&game()), 0.0);
    }

    #[test]
    fn criterion_spec_deserializes_with_source() {
        let json = r#"{
            "name": "pos_ratio",
            "direction": "benefit",
            "source": {"kind": "ratio", "numerator": "positive", "complement": "negative"}
        }"#;
        let spec: CriterionSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.direction, Direction::Benefit);
        assert!((spec.value_of(&game()) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn criterion_spec_direction_defaults_to_cost() {
        let spec: CriterionSpec = serde_json::from_str(r#"{"name": "price"}"#).unwrap();
        assert_eq!(spec.direction, Direction::Cost);
        assert!(spec.source.is_none());
    }
}
