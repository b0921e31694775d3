//! Config path resolution and default file creation.

use medassist_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable naming a directory that holds `config.toml`,
/// used instead of the platform config directory.
pub const CONFIG_DIR_ENV: &str = "MEDASSIST_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the config file path, honoring `MEDASSIST_CONFIG_DIR` before the
/// platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var(CONFIG_DIR_ENV).ok())
}

/// `<dir_override>/config.toml` when the override is non-blank, else
/// `<platform config dir>/medassist/config.toml`.
pub(crate) fn resolve_config_path(dir_override: Option<String>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = dir_override.as_deref().map(str::trim) {
        if !dir.is_empty() {
            debug!("{CONFIG_DIR_ENV} points config at {dir}");
            return Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME));
        }
    }

    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError(format!(
            "could not determine config directory; set {CONFIG_DIR_ENV}"
        ))
    })?;
    Ok(config_dir.join("medassist").join(CONFIG_FILE_NAME))
}

/// Write the commented default config, creating parent directories.
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        debug!("config already present at {}", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
