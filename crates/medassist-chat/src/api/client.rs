//! HTTP backend struct and endpoint URL building.

use tracing::warn;

use super::config::HttpBackendConfig;

pub(crate) const SESSIONS_PATH: &str = "/api/sessions";
pub(crate) const CHAT_PATH: &str = "/api/chat";

/// `ChatBackend` over HTTP/JSON.
pub struct HttpBackend {
    pub(crate) config: HttpBackendConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("failed to build configured HTTP client, using defaults: {e}");
                reqwest::Client::new()
            });
        Self { config, http }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}
