//! Controller state and the snapshot handed to views.

use serde::Serialize;

use crate::conversation::{ConversationLog, Message};
use crate::facility::FacilityResultState;

/// Request phase. At most one dispatch is ever outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse { ticket: u64 },
}

#[derive(Debug)]
pub(crate) struct ControllerState {
    pub(crate) log: ConversationLog,
    pub(crate) pending_location: String,
    pub(crate) facility_result: FacilityResultState,
    pub(crate) phase: Phase,
    pub(crate) location_warning_active: bool,
    pub(crate) location_prompt_open: bool,
}

impl ControllerState {
    pub(crate) fn new(greeting: &str) -> Self {
        Self {
            log: ConversationLog::seeded(greeting),
            pending_location: String::new(),
            facility_result: FacilityResultState::new(),
            phase: Phase::Idle,
            location_warning_active: false,
            location_prompt_open: false,
        }
    }

    pub(crate) fn awaiting_response(&self) -> bool {
        matches!(self.phase, Phase::AwaitingResponse { .. })
    }
}

/// Owned copy of the controller state for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub messages: Vec<Message>,
    pub facilities: FacilityResultState,
    pub pending_location: String,
    pub awaiting_response: bool,
    pub location_warning_active: bool,
    pub location_prompt_open: bool,
}

impl From<&ControllerState> for StateSnapshot {
    fn from(state: &ControllerState) -> Self {
        Self {
            messages: state.log.messages().to_vec(),
            facilities: state.facility_result.clone(),
            pending_location: state.pending_location.clone(),
            awaiting_response: state.awaiting_response(),
            location_warning_active: state.location_warning_active,
            location_prompt_open: state.location_prompt_open,
        }
    }
}
