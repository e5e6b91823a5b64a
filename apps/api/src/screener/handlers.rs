//! Axum route handlers for the Résumé Screener API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::screener::analysis::{screen_resume, ScreeningReport};
use crate::screener::document::{detect_kind, extract_text};
use crate::state::AppState;

struct UploadedResume {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

/// POST /api/v1/screener/analyze
///
/// Multipart fields:
/// - `resume`: PDF or plain-text file (optional if `resume_text` is given)
/// - `resume_text`: pasted résumé text (ignored when a file is uploaded)
/// - `job_description`: required
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    let mut upload: Option<UploadedResume> = None;
    let mut pasted_text = String::new();
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                if bytes.len() > state.config.max_upload_bytes {
                    return Err(AppError::Validation(format!(
                        "Resume upload exceeds {} bytes",
                        state.config.max_upload_bytes
                    )));
                }
                if !bytes.is_empty() {
                    upload = Some(UploadedResume {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            Some("resume_text") => pasted_text = read_text_field(field).await?,
            Some("job_description") => job_description = read_text_field(field).await?,
            _ => {}
        }
    }

    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let resume_text = match upload {
        Some(file) => {
            let kind = detect_kind(
                file.file_name.as_deref(),
                file.content_type.as_deref(),
                &file.bytes,
            )
            .ok_or_else(|| {
                AppError::UnreadableDocument(
                    "Unsupported resume format; upload a PDF or plain-text file".to_string(),
                )
            })?;
            info!(?kind, bytes = file.bytes.len(), "Screening uploaded resume");
            extract_text(file.bytes, kind).await?
        }
        None if !pasted_text.trim().is_empty() => pasted_text,
        None => {
            return Err(AppError::Validation(
                "Upload a resume or paste resume text before running analysis".to_string(),
            ))
        }
    };

    let report = screen_resume(state.llm.as_ref(), &resume_text, &job_description).await?;
    info!(match_score = ?report.match_score, "Resume screening complete");
    Ok(Json(report))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read form field: {e}")))
}
