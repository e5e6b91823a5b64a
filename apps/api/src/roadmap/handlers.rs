//! Axum route handlers for the Skill Roadmap API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::roadmap::generator::{generate_roadmap, Roadmap, RoadmapRequest, ROADMAP_FILE_NAME};
use crate::state::AppState;

/// POST /api/v1/roadmap
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<Roadmap>, AppError> {
    let roadmap = generate_roadmap(state.llm.as_ref(), &request).await?;
    info!(weeks = request.timeline_weeks, "Roadmap generated");
    Ok(Json(roadmap))
}

/// POST /api/v1/roadmap/download
///
/// Same generation, returned as a markdown attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Response, AppError> {
    let roadmap = generate_roadmap(state.llm.as_ref(), &request).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{ROADMAP_FILE_NAME}\""),
            ),
        ],
        roadmap.roadmap_markdown,
    )
        .into_response())
}
