//! Conversation text configuration.

use serde::{Deserialize, Serialize};

/// Canned assistant texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Seeded as the first transcript entry.
    pub greeting: String,
    /// Appended in place of a reply when a dispatch fails.
    pub fallback_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello! I'm your medical assistant. How can I help you today?".into(),
            fallback_message: "Sorry, I'm having trouble connecting. Please try again.".into(),
        }
    }
}
