//! Axum route handlers for the Mock Interviewer API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{
    Difficulty, InterviewConfig, SessionStatus, Turn, SUGGESTED_ROLES, SUGGESTED_TOPICS,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct InterviewOptionsResponse {
    pub roles: &'static [&'static str],
    pub topics: &'static [&'static str],
    pub difficulties: [Difficulty; 3],
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub turn: Turn,
    pub transcript: Vec<Turn>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub config: Option<InterviewConfig>,
    pub status: SessionStatus,
    pub transcript: Vec<Turn>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/interview/options
pub async fn handle_options() -> Json<InterviewOptionsResponse> {
    Json(InterviewOptionsResponse {
        roles: SUGGESTED_ROLES,
        topics: SUGGESTED_TOPICS,
        difficulties: [Difficulty::Junior, Difficulty::Mid, Difficulty::Senior],
    })
}

/// POST /api/v1/interview/sessions
///
/// Opens an empty session. Each dashboard user gets their own id.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    info!(%session_id, "Interview session created");
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// POST /api/v1/interview/sessions/:id/start
///
/// Discards any previous transcript and returns the interviewer's opening turn.
pub async fn handle_start(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(config): Json<InterviewConfig>,
) -> Result<Json<TurnResponse>, AppError> {
    if config.role.trim().is_empty() || config.topic.trim().is_empty() {
        return Err(AppError::Validation(
            "role and topic cannot be empty".to_string(),
        ));
    }

    let mut store = state.sessions.acquire(session_id).await?;
    info!(%session_id, difficulty = %config.difficulty, "Starting interview");
    let turn = state.interviewer.start_interview(&mut store, config).await?;

    Ok(Json(TurnResponse {
        turn,
        transcript: store.current().to_vec(),
    }))
}

/// POST /api/v1/interview/sessions/:id/answers
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<TurnResponse>, AppError> {
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let mut store = state.sessions.acquire(session_id).await?;
    info!(%session_id, "Answer submitted");
    let turn = state
        .interviewer
        .submit_answer(&mut store, &request.answer)
        .await?;

    Ok(Json(TurnResponse {
        turn,
        transcript: store.current().to_vec(),
    }))
}

/// POST /api/v1/interview/sessions/:id/retry
///
/// Resends an answer whose reply failed, without duplicating it.
pub async fn handle_retry(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TurnResponse>, AppError> {
    let mut store = state.sessions.acquire(session_id).await?;
    info!(%session_id, "Retrying pending answer");
    let turn = state.interviewer.retry_answer(&mut store).await?;

    Ok(Json(TurnResponse {
        turn,
        transcript: store.current().to_vec(),
    }))
}

/// GET /api/v1/interview/sessions/:id/transcript
pub async fn handle_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let store = state.sessions.acquire(session_id).await?;
    Ok(Json(TranscriptResponse {
        config: store.config().cloned(),
        status: store.status(),
        transcript: store.current().to_vec(),
    }))
}

/// DELETE /api/v1/interview/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(session_id).await {
        return Err(AppError::NotFound(format!(
            "Interview session {session_id} not found"
        )));
    }
    info!(%session_id, "Interview session ended");
    Ok(StatusCode::NO_CONTENT)
}
