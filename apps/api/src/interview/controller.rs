//! Interview Controller — the turn protocol between a `SessionStore` and the model.
//!
//! State machine per session:
//! `Empty --start--> AwaitingAnswer --answer ok--> AwaitingAnswer`
//! `AwaitingAnswer --answer, model fails--> AwaitingReply --retry ok--> AwaitingAnswer`
//! Any state `--start-->` resets and begins again.
//!
//! The model is stateless per call, so every reply request replays the full
//! prior transcript. Failures are surfaced, never retried here.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::models::{InterviewConfig, Role, Turn};
use crate::interview::prompts::build_persona_instruction;
use crate::interview::store::SessionStore;
use crate::llm_client::{ChatModel, ChatRequest, ChatTurn, ProviderRole};

#[derive(Clone)]
pub struct InterviewController {
    model: Arc<dyn ChatModel>,
}

impl InterviewController {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Resets the session to `config` and asks the model for its opening turn.
    ///
    /// On failure the session stays reset with an empty transcript, so the
    /// call can simply be repeated.
    pub async fn start_interview(
        &self,
        store: &mut SessionStore,
        config: InterviewConfig,
    ) -> Result<Turn, AppError> {
        let instruction = build_persona_instruction(&config);
        store.reset(config);

        let reply = self
            .model
            .complete(ChatRequest::single_shot(&instruction))
            .await
            .map_err(|e| {
                warn!("Opening question request failed: {e}");
                AppError::from(e)
            })?;

        let turn = Turn::assistant(reply);
        store.append(turn.clone());
        info!("Interview started");
        Ok(turn)
    }

    /// Records the candidate's answer and asks the model for the next turn.
    ///
    /// The user turn is committed before the model call so it survives a
    /// failure. Resubmitting the same text while it is still unanswered
    /// resends it instead of appending a duplicate; different text is
    /// rejected with `AnswerPending` to keep turns alternating.
    pub async fn submit_answer(
        &self,
        store: &mut SessionStore,
        answer: &str,
    ) -> Result<Turn, AppError> {
        if store.is_empty() {
            return Err(AppError::NoActiveSession);
        }

        match store.pending_answer() {
            Some(pending) if pending.text == answer => {
                info!("Answer resubmitted while unanswered; resending");
            }
            Some(_) => return Err(AppError::AnswerPending),
            None => store.append(Turn::user(answer)),
        }

        self.request_reply(store).await
    }

    /// Resends the trailing unanswered answer without appending anything.
    pub async fn retry_answer(&self, store: &mut SessionStore) -> Result<Turn, AppError> {
        if store.is_empty() {
            return Err(AppError::NoActiveSession);
        }
        if store.pending_answer().is_none() {
            return Err(AppError::Validation(
                "There is no unanswered answer to retry".to_string(),
            ));
        }
        info!("Retrying unanswered answer");
        self.request_reply(store).await
    }

    /// Sends the trailing user turn with everything before it as history.
    async fn request_reply(&self, store: &mut SessionStore) -> Result<Turn, AppError> {
        let (message, history) = match store.current().split_last() {
            Some((last, prior)) if last.speaker == Role::User => {
                (last.text.clone(), replay_history(prior))
            }
            _ => return Err(AppError::NoActiveSession),
        };
        let system = store.config().map(build_persona_instruction);

        let reply = self
            .model
            .complete(ChatRequest {
                system: system.as_deref(),
                history: &history,
                message: &message,
            })
            .await
            .map_err(|e| {
                warn!(
                    history_turns = history.len(),
                    "Interviewer reply request failed: {e}"
                );
                AppError::from(e)
            })?;

        let turn = Turn::assistant(reply);
        store.append(turn.clone());
        info!(transcript_len = store.current().len(), "Interviewer replied");
        Ok(turn)
    }
}

/// Translates transcript turns into the model's vocabulary, preserving order.
pub fn replay_history(transcript: &[Turn]) -> Vec<ChatTurn> {
    transcript
        .iter()
        .map(|turn| ChatTurn {
            role: match turn.speaker {
                Role::User => ProviderRole::User,
                Role::Assistant => ProviderRole::Model,
            },
            text: turn.text.clone(),
        })
        .collect()
}
