use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Observability events emitted by the chat controller at component
/// boundaries. Views and loggers subscribe; the controller never waits on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChatEvent {
    SessionStarted { session_id: String },
    MessageAppended { index: usize, is_user: bool },
    LocationRequired,
    LocationSet { location: String },
    DispatchStarted { ticket: u64 },
    DispatchFinished { ticket: u64, ok: bool },
    FacilitiesReplaced { count: usize },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ChatEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ChatEvent) -> usize {
        tracing::trace!(?event, "chat event");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
