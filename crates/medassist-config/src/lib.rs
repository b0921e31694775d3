//! MedAssist configuration system.
//!
//! Provides TOML-based configuration for the chat client: backend
//! endpoint and timeouts, the assistant's canned texts, and logging.
//! All sections use sensible defaults so partial configs work out of
//! the box. `MEDASSIST_API_URL` overrides the backend base URL and
//! `MEDASSIST_CONFIG_DIR` relocates the config file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medassist_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, API_URL_ENV};
pub use schema::{MedAssistConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use medassist_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, applies environment overrides, and validates the result.
pub fn load_config() -> Result<MedAssistConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit file, then apply environment overrides
/// and validate.
pub fn load_config_from(path: &Path) -> Result<MedAssistConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MedAssistConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = MedAssistConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"api\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"http://localhost:5000\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = MedAssistConfig::default();
        let json = config_to_json(&config);
        let parsed: MedAssistConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api.base_url, "http://localhost:5000");
        assert_eq!(parsed.api.dispatch_timeout_secs, 60);
        assert_eq!(parsed.chat.greeting, config.chat.greeting);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ndispatch_timeout_secs = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("api.dispatch_timeout_secs"));
    }
}
