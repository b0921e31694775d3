//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod api;
mod chat;
mod helpers;


use crate::schema::MedAssistConfig;
use medassist_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MedAssistConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    chat::validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
