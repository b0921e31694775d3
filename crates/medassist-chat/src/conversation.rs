//! The transcript: an append-only, ordered record of chat messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// One transcript entry. Timestamps are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub author: Author,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Author::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Author::Assistant)
    }

    fn new(text: impl Into<String>, author: Author) -> Self {
        Self {
            text: text.into(),
            author,
            sent_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

/// Ordered message history. Entries are never reordered, edited or removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log whose first entry is the assistant's greeting.
    pub fn seeded(greeting: impl Into<String>) -> Self {
        let mut log = Self::new();
        log.seed(greeting);
        log
    }

    /// Insert the greeting. Only takes effect on an empty log; returns
    /// whether it did.
    pub fn seed(&mut self, greeting: impl Into<String>) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(Message::assistant(greeting));
        true
    }

    /// Append a message, returning its index.
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
