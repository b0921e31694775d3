//! Failure kinds of the two network-facing operations.

use std::time::Duration;

/// Backend session could not be acquired. Fatal for the controller: no
/// dispatch may happen without a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionInitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed session response: {0}")]
    Malformed(String),
}

/// One chat round-trip failed. Recovered by the controller as a fallback
/// assistant message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed chat response: {0}")]
    Malformed(String),
    #[error("dispatch timed out after {0:?}")]
    Timeout(Duration),
}

/// Keep error bodies short enough for a log line.
pub(crate) fn truncate_body(text: &str) -> String {
    text.chars().take(200).collect()
}
