//! Submission outcomes and the detached dispatch handle.

use std::sync::Arc;
use std::time::Duration;

use crate::dispatcher::{ChatResult, MessageDispatcher};
use crate::{ChatRequest, DispatchError};

pub(crate) const DEFAULT_GREETING: &str =
    "Hello! I'm your medical assistant. How can I help you today?";
pub(crate) const DEFAULT_FALLBACK: &str =
    "Sorry, I'm having trouble connecting. Please try again.";

/// Why a submission was not sent. Not an error: state is unchanged apart
/// from the location warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Empty or whitespace-only input.
    Blank,
    /// The question needs a location and none is set. The warning flag is raised.
    LocationRequired,
    /// A dispatch is already outstanding.
    Busy,
}

/// Controller tunables.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Seeded as the first assistant message.
    pub greeting: String,
    /// Appended when a dispatch fails.
    pub fallback_message: String,
    /// Bound on one dispatch; `None` waits indefinitely.
    pub dispatch_timeout: Option<Duration>,
}

impl ControllerOptions {
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn with_dispatch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.dispatch_timeout = timeout;
        self
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            fallback_message: DEFAULT_FALLBACK.into(),
            dispatch_timeout: Some(Duration::from_secs(60)),
        }
    }
}

/// An accepted submission whose request has not been sent yet.
///
/// Holds everything needed to perform the round-trip, so it can be awaited
/// without borrowing the controller.
#[must_use = "a pending dispatch does nothing until run and resolved"]
pub struct PendingDispatch {
    pub(crate) ticket: u64,
    pub(crate) request: ChatRequest,
    pub(crate) dispatcher: Arc<MessageDispatcher>,
    pub(crate) timeout: Option<Duration>,
}

impl PendingDispatch {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn request(&self) -> &ChatRequest {
        &self.request
    }

    /// Perform the round-trip. Timeout expiry resolves as a failure.
    pub async fn run(self) -> DispatchOutcome {
        let send = self.dispatcher.send_request(&self.request);
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, send).await {
                Ok(result) => result,
                Err(_) => Err(DispatchError::Timeout(limit)),
            },
            None => send.await,
        };
        DispatchOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// A finished dispatch, to be handed back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub ticket: u64,
    pub result: Result<ChatResult, DispatchError>,
}
