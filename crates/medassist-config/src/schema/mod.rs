//! Configuration schema types for MedAssist.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the chat client ships with.

mod api;
mod chat;
mod system;

pub use api::*;
pub use chat::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for MedAssist.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MedAssistConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_points_at_local_backend() {
        let config = MedAssistConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.api.dispatch_timeout_secs, 60);
    }

    #[test]
    fn default_chat_texts() {
        let config = MedAssistConfig::default();
        assert_eq!(
            config.chat.greeting,
            "Hello! I'm your medical assistant. How can I help you today?"
        );
        assert_eq!(
            config.chat.fallback_message,
            "Sorry, I'm having trouble connecting. Please try again."
        );
    }

    #[test]
    fn default_logging_level_is_info() {
        let config = MedAssistConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_directive(), "info");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: MedAssistConfig = toml::from_str(
            r#"
[api]
base_url = "https://triage.example.org"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://triage.example.org");
        assert_eq!(config.api.dispatch_timeout_secs, 60);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: MedAssistConfig = toml::from_str(
            r#"
[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
}
