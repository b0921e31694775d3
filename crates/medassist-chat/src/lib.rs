//! Conversational session controller for the MedAssist symptom chat.
//!
//! Provides:
//! - An HTTP client for the backend's session and chat endpoints
//! - Session acquisition (one backend session per controller)
//! - A keyword heuristic that gates location-dependent questions
//! - The transcript and the latest nearby-facility results
//! - `ChatSessionController`, which ties these together behind a
//!   single in-flight-request guard

pub mod api;
pub mod controller;
pub mod conversation;
pub mod dispatcher;
pub mod error;
pub mod facility;
pub mod gate;
pub mod session;
pub mod wire;

use async_trait::async_trait;

pub use api::{HttpBackend, HttpBackendConfig};
pub use controller::{
    ChatSessionController, ControllerOptions, DispatchOutcome, PendingDispatch, Phase,
    StateSnapshot, SubmitRejection,
};
pub use conversation::{Author, ConversationLog, Message};
pub use dispatcher::{ChatResult, MessageDispatcher};
pub use error::{DispatchError, SessionInitError};
pub use facility::{directions_url, FacilityEntry, FacilityResultState, FacilityType, FacilityView};
pub use gate::LocationGate;
pub use session::{Session, SessionManager};
pub use wire::{ChatRequest, ChatResponse, CreateSessionResponse};

/// The two backend calls the chat core depends on.
///
/// `HttpBackend` talks to the real service; tests substitute in-process
/// implementations.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `POST /api/sessions`
    async fn create_session(&self) -> Result<CreateSessionResponse, SessionInitError>;

    /// `POST /api/chat`
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, DispatchError>;
}
