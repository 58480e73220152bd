//! Application configuration module
//!
//! Configuration is read from environment variables with the `LIT_COMPASS`
//! prefix; nested values are separated by double underscores. A `.env`
//! file is honoured during development. Every section has defaults, so an
//! empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use lit_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod content;
mod error;
mod logging;

pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Catalog source and threshold override
    #[serde(default)]
    pub content: ContentConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `LIT_COMPASS__CONTENT__PATH=./catalog.yaml` -> `content.path`
    /// - `LIT_COMPASS__CONTENT__THRESHOLD=20` -> `content.threshold`
    /// - `LIT_COMPASS__LOGGING__FORMAT=json` -> `logging.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LIT_COMPASS")
                    .separator("__"),
            )
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
        self.content.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "LIT_COMPASS__CONTENT__PATH",
        "LIT_COMPASS__CONTENT__THRESHOLD",
        "LIT_COMPASS__LOGGING__LEVEL",
        "LIT_COMPASS__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_content_settings() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LIT_COMPASS__CONTENT__PATH", "/srv/compass/catalog.yml");
        env::set_var("LIT_COMPASS__CONTENT__THRESHOLD", "20");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.content.path,
            Some(PathBuf::from("/srv/compass/catalog.yml"))
        );
        assert_eq!(config.content.threshold, Some(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_logging_settings() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LIT_COMPASS__LOGGING__LEVEL", "warn");
        env::set_var("LIT_COMPASS__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_threshold_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LIT_COMPASS__CONTENT__THRESHOLD", "high");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_catalog_format() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LIT_COMPASS__CONTENT__PATH", "catalog.csv");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedContentFormat(_))
        ));
    }
}
