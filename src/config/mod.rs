//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MCDA_ENGINE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mcda_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default method: {}", config.ranking.default_method);
//! ```

mod dominance;
mod error;
mod logging;
mod ranking;

pub use dominance::DominanceConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ranking::RankingConfig;

use std::path::Path;

use serde::Deserialize;

const ENV_PREFIX: &str = "MCDA_ENGINE";

/// Keys whose environment values are comma-separated lists
const LIST_KEYS: [&str; 2] = ["ranking.echo_fields", "dominance.ideal_point"];

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Request defaults (method, top_n, UTA segments, echoed fields)
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Pareto filter settings
    #[serde(default)]
    pub dominance: DominanceConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MCDA_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDA_ENGINE__RANKING__DEFAULT_METHOD=vikor` -> `ranking.default_method = VIKOR`
    /// - `MCDA_ENGINE__RANKING__ECHO_FIELDS=name,price` -> `ranking.echo_fields = [name, price]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format follows the file extension (`.toml`, `.json`, `.yaml`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if values
    /// cannot be parsed into expected types.
    pub fn load_with_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ranking.validate()?;
        self.dominance.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    let mut source = config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",");
    for key in LIST_KEYS {
        source = source.with_list_parse_key(key);
    }
    source
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dominance::DominanceVariant;
    use crate::domain::scoring::Method;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "MCDA_ENGINE__RANKING__DEFAULT_METHOD",
        "MCDA_ENGINE__RANKING__TOP_N",
        "MCDA_ENGINE__RANKING__ECHO_FIELDS",
        "MCDA_ENGINE__DOMINANCE__VARIANT",
        "MCDA_ENGINE__DOMINANCE__IDEAL_POINT",
        "MCDA_ENGINE__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ranking.default_method, Method::Topsis);
        assert_eq!(config.ranking.top_n, 10);
        assert_eq!(config.dominance.variant, DominanceVariant::PreSorted);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_ENGINE__RANKING__DEFAULT_METHOD", "vikor");
        env::set_var("MCDA_ENGINE__RANKING__TOP_N", "3");
        env::set_var("MCDA_ENGINE__DOMINANCE__VARIANT", "exhaustive");
        env::set_var("MCDA_ENGINE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ranking.default_method, Method::Vikor);
        assert_eq!(config.ranking.top_n, 3);
        assert_eq!(config.dominance.variant, DominanceVariant::Exhaustive);
        assert!(config.logging.json);
    }

    #[test]
    fn test_list_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_ENGINE__RANKING__ECHO_FIELDS", "name,price");
        env::set_var("MCDA_ENGINE__DOMINANCE__IDEAL_POINT", "1.5,2.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ranking.echo_fields, vec!["name", "price"]);
        assert_eq!(config.dominance.ideal_point, Some(vec![1.5, 2.5]));
    }

    #[test]
    fn test_unknown_method_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_ENGINE__RANKING__DEFAULT_METHOD", "electre");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_with_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[ranking]\ndefault_method = \"uta\"\nuta_segments = 8\necho_fields = [\"name\"]\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = AppConfig::load_with_file(file.path()).unwrap();
        assert_eq!(config.ranking.default_method, Method::Uta);
        assert_eq!(config.ranking.uta_segments, 8);
        assert_eq!(config.ranking.echo_fields, vec!["name"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ranking.top_n, 10);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ranking]\ntop_n = 4").unwrap();
        env::set_var("MCDA_ENGINE__RANKING__TOP_N", "7");
        let result = AppConfig::load_with_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().ranking.top_n, 7);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_with_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }
}
