//! Append-only message list with strictly increasing timestamps.

use chrono::{DateTime, Duration, Utc};
use redscope_common::MessageId;

use crate::message::{Message, MessageContent, Role};

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// A transcript holding one assistant greeting.
    pub(crate) fn seeded(greeting: impl Into<String>) -> Self {
        let mut transcript = Self::default();
        transcript.append(Role::Assistant, MessageContent::Text(greeting.into()));
        transcript
    }

    /// Append a new message stamped with the current time and return a copy.
    pub(crate) fn append(&mut self, role: Role, content: MessageContent) -> Message {
        self.append_at(role, content, Utc::now())
    }

    /// Timestamps never repeat or go backwards: a clock reading at or before
    /// the last entry is moved one microsecond past it.
    pub(crate) fn append_at(
        &mut self,
        role: Role,
        content: MessageContent,
        now: DateTime<Utc>,
    ) -> Message {
        let timestamp = match self.messages.last() {
            Some(prev) if now <= prev.timestamp => prev.timestamp + Duration::microseconds(1),
            _ => now,
        };
        let message = Message {
            id: MessageId::new(),
            content,
            role,
            timestamp,
        };
        self.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
