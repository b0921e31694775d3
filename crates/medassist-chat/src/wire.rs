//! JSON bodies exchanged with the backend.

use medassist_common::SessionId;
use serde::{Deserialize, Serialize};

use crate::facility::FacilityEntry;

/// Body of `POST /api/sessions` responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// Body of `POST /api/chat` requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub session_id: SessionId,
    pub message: String,
    pub location: String,
}

/// Body of `POST /api/chat` responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ChatData>,
}

/// Structured payload riding along with a chat reply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinics: Option<Vec<FacilityEntry>>,
}

impl ChatResponse {
    /// Facility entries carried by the response, empty when the backend
    /// sent no `data`, no `clinics`, or `null` for either.
    pub fn into_parts(self) -> (String, Vec<FacilityEntry>) {
        let facilities = self.data.and_then(|d| d.clinics).unwrap_or_default();
        (self.response, facilities)
    }
}
