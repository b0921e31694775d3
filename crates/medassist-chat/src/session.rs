//! Backend session acquisition.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use medassist_common::SessionId;
use tracing::{debug, info};

use crate::{ChatBackend, SessionInitError};

/// A backend-issued session. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Acquires and holds the single session used for every dispatch.
pub struct SessionManager {
    backend: Arc<dyn ChatBackend>,
    session: Option<Session>,
}

impl SessionManager {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            session: None,
        }
    }

    /// Create the backend session. The endpoint is called at most once per
    /// manager: after a success, later calls return the stored session.
    pub async fn initialize(&mut self) -> Result<Session, SessionInitError> {
        if let Some(ref session) = self.session {
            debug!(session = %session.id(), "session already initialized");
            return Ok(session.clone());
        }

        let response = self.backend.create_session().await?;
        let id = response.session_id.trim();
        if id.is_empty() {
            return Err(SessionInitError::Malformed("empty sessionId".into()));
        }

        let session = Session::new(SessionId::new(id));
        info!(session = %session.id(), "chat session created");
        self.session = Some(session.clone());
        Ok(session)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
