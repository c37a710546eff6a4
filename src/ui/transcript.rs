// src/ui/transcript.rs
use serde::{Deserialize, Serialize};

/// Shown in place of a reply when the relay could not be reached.
pub const FAILED_REPLY: &str = "Error fetching response";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptEvent {
    Sent(String),
    Replied(String),
    Failed,
}

/// Append-only list of messages for one UI session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: TranscriptEvent) {
        let message = match event {
            TranscriptEvent::Sent(text) => Message { sender: Sender::User, text },
            TranscriptEvent::Replied(text) => Message { sender: Sender::Bot, text },
            TranscriptEvent::Failed => Message {
                sender: Sender::Bot,
                text: FAILED_REPLY.to_string(),
            },
        };
        self.messages.push(message);
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
}
