//! ChatSessionController: submission, gating, dispatch and resolution.

use std::sync::Arc;

use medassist_common::{ChatEvent, EventBus};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::conversation::{ConversationLog, Message};
use crate::dispatcher::MessageDispatcher;
use crate::facility::FacilityResultState;
use crate::gate::LocationGate;
use crate::session::{Session, SessionManager};
use crate::{ChatBackend, ChatRequest, SessionInitError};

use super::state::{ControllerState, Phase, StateSnapshot};
use super::types::{ControllerOptions, DispatchOutcome, PendingDispatch, SubmitRejection};

/// Orchestrates one chat session for the lifetime of the client.
///
/// Construction requires a `Session`, so nothing can be dispatched unless
/// session initialization succeeded.
pub struct ChatSessionController {
    session: Session,
    dispatcher: Arc<MessageDispatcher>,
    gate: LocationGate,
    options: ControllerOptions,
    state: ControllerState,
    next_ticket: u64,
    events: EventBus,
}

impl ChatSessionController {
    pub fn new(
        session: Session,
        dispatcher: MessageDispatcher,
        options: ControllerOptions,
    ) -> Self {
        let state = ControllerState::new(&options.greeting);
        Self {
            session,
            dispatcher: Arc::new(dispatcher),
            gate: LocationGate::new(),
            options,
            state,
            next_ticket: 0,
            events: EventBus::default(),
        }
    }

    /// Acquire a backend session and build a controller on it.
    pub async fn start(
        backend: Arc<dyn ChatBackend>,
        options: ControllerOptions,
    ) -> Result<Self, SessionInitError> {
        let mut sessions = SessionManager::new(Arc::clone(&backend));
        let session = sessions.initialize().await?;
        let controller = Self::new(session, MessageDispatcher::new(backend), options);
        controller.events.publish(ChatEvent::SessionStarted {
            session_id: controller.session.id().to_string(),
        });
        Ok(controller)
    }

    /// Validate and gate `text`; on acceptance append it to the transcript
    /// and return the dispatch to run.
    pub fn submit(&mut self, text: &str) -> Result<PendingDispatch, SubmitRejection> {
        if self.state.awaiting_response() {
            debug!("submission rejected: a reply is still outstanding");
            return Err(SubmitRejection::Busy);
        }
        if text.trim().is_empty() {
            return Err(SubmitRejection::Blank);
        }
        if self.gate.blocks(text, &self.state.pending_location) {
            info!("submission needs a location, none set");
            self.state.location_warning_active = true;
            self.events.publish(ChatEvent::LocationRequired);
            return Err(SubmitRejection::LocationRequired);
        }

        self.state.location_warning_active = false;
        self.append(Message::user(text));

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.state.phase = Phase::AwaitingResponse { ticket };
        self.events.publish(ChatEvent::DispatchStarted { ticket });

        Ok(PendingDispatch {
            ticket,
            request: ChatRequest {
                session_id: self.session.id().clone(),
                message: text.to_string(),
                location: self.state.pending_location.clone(),
            },
            dispatcher: Arc::clone(&self.dispatcher),
            timeout: self.options.dispatch_timeout,
        })
    }

    /// Apply a finished dispatch: exactly one assistant message is appended,
    /// and the facility list is replaced on success. Outcomes that do not
    /// match the outstanding dispatch are ignored; returns whether it applied.
    pub fn resolve(&mut self, outcome: DispatchOutcome) -> bool {
        match self.state.phase {
            Phase::AwaitingResponse { ticket } if ticket == outcome.ticket => {}
            phase => {
                warn!(
                    ticket = outcome.ticket,
                    ?phase,
                    "ignoring stale dispatch outcome"
                );
                return false;
            }
        }

        let ok = outcome.result.is_ok();
        match outcome.result {
            Ok(result) => {
                let count = result.facilities.len();
                self.state.facility_result.replace(result.facilities);
                self.events.publish(ChatEvent::FacilitiesReplaced { count });
                self.append(Message::assistant(result.reply_text));
            }
            Err(e) => {
                warn!(ticket = outcome.ticket, "dispatch failed: {e}");
                let fallback = self.options.fallback_message.clone();
                self.append(Message::assistant(fallback));
            }
        }

        self.state.phase = Phase::Idle;
        self.events.publish(ChatEvent::DispatchFinished {
            ticket: outcome.ticket,
            ok,
        });
        true
    }

    /// Submit, wait for the reply, and apply it.
    pub async fn send(&mut self, text: &str) -> Result<(), SubmitRejection> {
        let pending = self.submit(text)?;
        let outcome = pending.run().await;
        self.resolve(outcome);
        Ok(())
    }

    /// Open or close the location prompt, returning whether it is now open.
    pub fn toggle_location_prompt(&mut self) -> bool {
        self.state.location_prompt_open = !self.state.location_prompt_open;
        self.state.location_prompt_open
    }

    /// Store the location attached to every later dispatch and acknowledge it.
    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        info!(%location, "location set");
        self.append(Message::assistant(format!(
            "I'll use \"{location}\" as your location."
        )));
        self.events.publish(ChatEvent::LocationSet {
            location: location.clone(),
        });
        self.state.pending_location = location;
        self.state.location_prompt_open = false;
        self.state.location_warning_active = false;
    }

    /// Expand or collapse the facility list, returning whether it is now expanded.
    pub fn toggle_facilities(&mut self) -> bool {
        self.state.facility_result.toggle()
    }

    fn append(&mut self, message: Message) {
        let is_user = message.is_user();
        let index = self.state.log.append(message);
        self.events.publish(ChatEvent::MessageAppended { index, is_user });
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(&self.state)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn log(&self) -> &ConversationLog {
        &self.state.log
    }

    pub fn facilities(&self) -> &FacilityResultState {
        &self.state.facility_result
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn awaiting_response(&self) -> bool {
        self.state.awaiting_response()
    }

    pub fn location_warning_active(&self) -> bool {
        self.state.location_warning_active
    }

    pub fn location_prompt_open(&self) -> bool {
        self.state.location_prompt_open
    }

    pub fn pending_location(&self) -> &str {
        &self.state.pending_location
    }
}
