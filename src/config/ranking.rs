//! Ranking configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::constraints::DEFAULT_TOP_N;
use crate::domain::scoring::{Method, DEFAULT_UTA_SEGMENTS};

/// Defaults applied to recommendation requests that leave them out
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Scoring method used when a request names none
    #[serde(default)]
    pub default_method: Method,

    /// Maximum number of results
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Utility segments for UTA
    #[serde(default = "default_uta_segments")]
    pub uta_segments: usize,

    /// Record fields copied into every recommendation
    #[serde(default)]
    pub echo_fields: Vec<String>,
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        if self.uta_segments == 0 {
            return Err(ValidationError::InvalidUtaSegments);
        }
        if self.echo_fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::EmptyEchoField);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_method: Method::default(),
            top_n: default_top_n(),
            uta_segments: default_uta_segments(),
            echo_fields: Vec::new(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_uta_segments() -> usize {
    DEFAULT_UTA_SEGMENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_config_defaults() {
        let config = RankingConfig::default();
        assert_eq!(config.default_method, Method::Topsis);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.uta_segments, 5);
        assert!(config.echo_fields.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_top_n() {
        let config = RankingConfig {
            top_n: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTopN)));
    }

    #[test]
    fn test_validation_zero_segments() {
        let config = RankingConfig {
            uta_segments: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidUtaSegments)
        ));
    }

    #[test]
    fn test_validation_blank_echo_field() {
        let config = RankingConfig {
            echo_fields: vec!["name".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
