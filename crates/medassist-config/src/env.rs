//! Environment-variable overrides applied on top of the file config.

use tracing::info;

use crate::schema::MedAssistConfig;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "MEDASSIST_API_URL";

/// Apply all supported environment overrides to `config`.
pub fn apply_env_overrides(config: &mut MedAssistConfig) {
    override_api_url(config, std::env::var(API_URL_ENV).ok());
}

/// Replace the base URL when `value` is present and non-blank.
pub(crate) fn override_api_url(config: &mut MedAssistConfig, value: Option<String>) {
    let Some(url) = value.map(|v| v.trim().to_string()) else {
        return;
    };
    if url.is_empty() {
        return;
    }
    info!("{API_URL_ENV} overrides api.base_url with {url}");
    config.api.base_url = url;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_replaces_base_url() {
        let mut config = MedAssistConfig::default();
        override_api_url(&mut config, Some("https://triage.example.org".into()));
        assert_eq!(config.api.base_url, "https://triage.example.org");
    }

    #[test]
    fn missing_override_keeps_file_value() {
        let mut config = MedAssistConfig::default();
        config.api.base_url = "http://10.0.0.2:5000".into();
        override_api_url(&mut config, None);
        assert_eq!(config.api.base_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = MedAssistConfig::default();
        override_api_url(&mut config, Some("   ".into()));
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn override_is_trimmed() {
        let mut config = MedAssistConfig::default();
        override_api_url(&mut config, Some(" http://backend:8080 \n".into()));
        assert_eq!(config.api.base_url, "http://backend:8080");
    }
}
