//! Canned-text validation.

use crate::schema::MedAssistConfig;

use super::helpers::validate_not_blank;

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &MedAssistConfig) {
    validate_not_blank(errors, "chat.greeting", &config.chat.greeting);
    validate_not_blank(errors, "chat.fallback_message", &config.chat.fallback_message);
}
