//! ChatBackend trait implementation for HttpBackend.

use async_trait::async_trait;
use tracing::debug;

use crate::error::truncate_body;
use crate::{ChatBackend, ChatRequest, ChatResponse, CreateSessionResponse};
use crate::{DispatchError, SessionInitError};

use super::client::{HttpBackend, CHAT_PATH, SESSIONS_PATH};

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn create_session(&self) -> Result<CreateSessionResponse, SessionInitError> {
        let url = self.endpoint(SESSIONS_PATH);
        debug!(%url, "creating chat session");

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| SessionInitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SessionInitError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        response
            .json::<CreateSessionResponse>()
            .await
            .map_err(|e| SessionInitError::Malformed(e.to_string()))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, DispatchError> {
        let url = self.endpoint(CHAT_PATH);
        debug!(%url, "chat request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| DispatchError::Malformed(e.to_string()))
    }
}
