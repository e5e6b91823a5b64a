//! Session Store — the transcript and configuration of one user's live interview.
//!
//! The store does no ordering validation; turn policy lives in the controller.

use crate::interview::models::{InterviewConfig, Role, SessionStatus, Turn};

#[derive(Debug, Default)]
pub struct SessionStore {
    transcript: Vec<Turn>,
    config: Option<InterviewConfig>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the transcript and binds the store to `config`.
    pub fn reset(&mut self, config: InterviewConfig) {
        self.transcript.clear();
        self.config = Some(config);
    }

    pub fn append(&mut self, turn: Turn) {
        self.transcript.push(turn);
    }

    /// The transcript in chronological order; empty before the first start.
    pub fn current(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn config(&self) -> Option<&InterviewConfig> {
        self.config.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// The trailing user turn, if the model has not answered it yet.
    pub fn pending_answer(&self) -> Option<&Turn> {
        self.transcript
            .last()
            .filter(|turn| turn.speaker == Role::User)
    }

    pub fn status(&self) -> SessionStatus {
        match self.transcript.last() {
            None => SessionStatus::Empty,
            Some(turn) if turn.speaker == Role::User => SessionStatus::AwaitingReply,
            Some(_) => SessionStatus::AwaitingAnswer,
        }
    }
}
