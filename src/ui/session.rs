// src/ui/session.rs
use super::client::{ChatApi, ClientError};
use super::transcript::{Transcript, TranscriptEvent};

/// Input box plus transcript, wired to a relay.
///
/// Sending is split in two so callers can render the user's message before
/// the reply arrives: [`ChatSession::submit`] records the message and clears
/// the input, [`ChatSession::receive`] records the outcome. [`ChatSession::send`]
/// does both around the network call. Nothing stops a second submit while a
/// reply is pending; replies land in whatever order they are received.
#[derive(Debug)]
pub struct ChatSession<C> {
    api: C,
    input: String,
    transcript: Transcript,
}

impl<C: ChatApi> ChatSession<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            input: String::new(),
            transcript: Transcript::new(),
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the message to post, or `None` if the input is blank.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.transcript.apply(TranscriptEvent::Sent(text.clone()));
        Some(text)
    }

    pub fn receive(&mut self, result: Result<String, ClientError>) {
        match result {
            Ok(reply) => self.transcript.apply(TranscriptEvent::Replied(reply)),
            Err(e) => {
                tracing::warn!(error = %e, "relay call failed");
                self.transcript.apply(TranscriptEvent::Failed);
            }
        }
    }

    /// Submit the current input and wait for the reply. Returns false when
    /// there was nothing to send.
    pub async fn send(&mut self) -> bool {
        let Some(text) = self.submit() else {
            return false;
        };
        let result = self.api.send(&text).await;
        self.receive(result);
        true
    }
}
