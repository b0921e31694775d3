//! HTTP backend client configuration.

use std::time::Duration;

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
