//! Backend API configuration types.

use serde::{Deserialize, Serialize};

/// Fallback backend endpoint when neither the config file nor the
/// environment names one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Backend endpoint and request timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/api/sessions` and `/api/chat` are appended to it.
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-600).
    pub connect_timeout_secs: u32,
    /// Upper bound on one chat round-trip in seconds (valid range: 1-600).
    /// Expiry is treated as a failed dispatch.
    pub dispatch_timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            connect_timeout_secs: 10,
            dispatch_timeout_secs: 60,
        }
    }
}
