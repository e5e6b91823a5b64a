use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// An answer was submitted before any interview was started.
    #[error("No interview has been started for this session")]
    NoActiveSession,

    /// The previous answer is still waiting for an interviewer reply.
    #[error("The previous answer has not been answered yet; retry it first")]
    AnswerPending,

    /// Another operation on the same session is still in flight.
    #[error("Session is busy with another request")]
    SessionBusy,

    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("Model call failed: {0}")]
    ModelCallFailed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::ModelCallFailed(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NoActiveSession => {
                (StatusCode::CONFLICT, "NO_ACTIVE_SESSION", self.to_string())
            }
            AppError::AnswerPending => (StatusCode::CONFLICT, "ANSWER_PENDING", self.to_string()),
            AppError::SessionBusy => (StatusCode::CONFLICT, "SESSION_BUSY", self.to_string()),
            AppError::UnreadableDocument(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNREADABLE_DOCUMENT",
                msg.clone(),
            ),
            AppError::ModelCallFailed(msg) => {
                tracing::error!("Model call failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_CALL_FAILED",
                    "The AI service could not be reached. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
