//! One chat round-trip, normalized.

use std::sync::Arc;

use medassist_common::{new_correlation_id, SessionId};
use tracing::{debug, warn};

use crate::facility::FacilityEntry;
use crate::{ChatBackend, ChatRequest, DispatchError};

/// A successful reply: the assistant text plus the facility list
/// (empty when the backend sent none).
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResult {
    pub reply_text: String,
    pub facilities: Vec<FacilityEntry>,
}

/// Sends user messages to the chat endpoint. One request per call, no
/// retries; timeouts are the caller's business.
pub struct MessageDispatcher {
    backend: Arc<dyn ChatBackend>,
}

impl MessageDispatcher {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    pub async fn send(
        &self,
        session_id: &SessionId,
        text: &str,
        location: &str,
    ) -> Result<ChatResult, DispatchError> {
        let request = ChatRequest {
            session_id: session_id.clone(),
            message: text.to_string(),
            location: location.to_string(),
        };
        self.send_request(&request).await
    }

    pub(crate) async fn send_request(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResult, DispatchError> {
        let cid = new_correlation_id();
        debug!(
            %cid,
            session = %request.session_id,
            has_location = !request.location.trim().is_empty(),
            "dispatching chat message"
        );

        let response = match self.backend.chat(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%cid, "chat dispatch failed: {e}");
                return Err(e);
            }
        };

        let (reply_text, facilities) = response.into_parts();
        debug!(%cid, facilities = facilities.len(), "chat reply received");
        Ok(ChatResult {
            reply_text,
            facilities,
        })
    }
}
