pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::roadmap::handlers as roadmap;
use crate::screener::handlers as screener;
use crate::state::AppState;

/// Headroom for the multipart envelope and text fields around the résumé file.
const MULTIPART_OVERHEAD_BYTES: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Mock Interviewer
        .route("/api/v1/interview/options", get(interview::handle_options))
        .route(
            "/api/v1/interview/sessions",
            post(interview::handle_create_session),
        )
        .route(
            "/api/v1/interview/sessions/:id",
            delete(interview::handle_end_session),
        )
        .route(
            "/api/v1/interview/sessions/:id/start",
            post(interview::handle_start),
        )
        .route(
            "/api/v1/interview/sessions/:id/answers",
            post(interview::handle_submit_answer),
        )
        .route(
            "/api/v1/interview/sessions/:id/retry",
            post(interview::handle_retry),
        )
        .route(
            "/api/v1/interview/sessions/:id/transcript",
            get(interview::handle_transcript),
        )
        // Resume Screener
        .route(
            "/api/v1/screener/analyze",
            post(screener::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Skill Roadmap
        .route("/api/v1/roadmap", post(roadmap::handle_generate))
        .route("/api/v1/roadmap/download", post(roadmap::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{self, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::stub::ScriptedModel;

    fn test_config() -> Config {
        Config {
            anthropic_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: 1024,
            idle_session_ttl_secs: 1800,
        }
    }

    fn test_app(model: ScriptedModel) -> (Router, Arc<ScriptedModel>) {
        let model = Arc::new(model);
        let app = build_router(AppState::new(model.clone(), test_config()));
        (app, model)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request")
    }

    async fn create_session(app: &Router) -> String {
        let request = Request::post("/api/v1/interview/sessions")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().expect("session id").to_string()
    }

    fn start_body() -> Value {
        json!({"role": "AI Engineer", "topic": "Technical Skills", "difficulty": "Mid"})
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (app, _) = test_app(ScriptedModel::new());
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["active_sessions"], 0);
    }

    #[tokio::test]
    async fn interview_flow_over_http() {
        let (app, _) = test_app(
            ScriptedModel::new()
                .reply("Hi, I'm your interviewer. Q1: explain a hash map.")
                .reply("Good, correct. Q2: ...")
                .fail(),
        );
        let id = create_session(&app).await;

        let (status, body) = send(
            &app,
            post_json(&format!("/api/v1/interview/sessions/{id}/start"), start_body()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["turn"]["speaker"], "assistant");
        assert_eq!(body["transcript"].as_array().unwrap().len(), 1);

        let answers = format!("/api/v1/interview/sessions/{id}/answers");
        let (status, body) = send(
            &app,
            post_json(&answers, json!({"answer": "A hash map uses..."})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["turn"]["text"], "Good, correct. Q2: ...");
        assert_eq!(body["transcript"].as_array().unwrap().len(), 3);

        let (status, body) = send(&app, post_json(&answers, json!({"answer": "Q2 answer"}))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "MODEL_CALL_FAILED");

        let (status, body) = send(
            &app,
            get(&format!("/api/v1/interview/sessions/{id}/transcript")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "awaiting_reply");
        assert_eq!(body["config"]["difficulty"], "Mid");
        let transcript = body["transcript"].as_array().unwrap();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[3]["speaker"], "user");
    }

    #[tokio::test]
    async fn answer_before_start_is_conflict() {
        let (app, model) = test_app(ScriptedModel::new().reply("unused"));
        let id = create_session(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                &format!("/api/v1/interview/sessions/{id}/answers"),
                json!({"answer": "anything"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "NO_ACTIVE_SESSION");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_answer_is_rejected() {
        let (app, _) = test_app(ScriptedModel::new().reply("Q1"));
        let id = create_session(&app).await;
        send(
            &app,
            post_json(&format!("/api/v1/interview/sessions/{id}/start"), start_body()),
        )
        .await;

        let (status, _) = send(
            &app,
            post_json(
                &format!("/api/v1/interview/sessions/{id}/answers"),
                json!({"answer": "   "}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ended_session_is_not_found() {
        let (app, _) = test_app(ScriptedModel::new());
        let id = create_session(&app).await;
        let uri = format!("/api/v1/interview/sessions/{id}");

        let delete = |uri: &str| Request::delete(uri).body(Body::empty()).expect("request");
        let (status, _) = send(&app, delete(&uri)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, delete(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, get(&format!("{uri}/transcript"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn sessions_do_not_share_transcripts() {
        let (app, _) = test_app(ScriptedModel::new().reply("Q1 for first user"));
        let first = create_session(&app).await;
        let second = create_session(&app).await;
        send(
            &app,
            post_json(&format!("/api/v1/interview/sessions/{first}/start"), start_body()),
        )
        .await;

        let (_, body) = send(
            &app,
            get(&format!("/api/v1/interview/sessions/{second}/transcript")),
        )
        .await;
        assert_eq!(body["status"], "empty");
        assert!(body["transcript"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn roadmap_download_is_markdown_attachment() {
        let (app, _) = test_app(ScriptedModel::new().reply("# Week 1\n- Python"));
        let request = post_json(
            "/api/v1/roadmap/download",
            json!({"current_profile": "Student", "target_role": "ML Engineer", "timeline_weeks": 2}),
        );

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"my_career_roadmap.md\""
        );
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(bytes.as_ref(), b"# Week 1\n- Python");
    }

    #[tokio::test]
    async fn roadmap_rejects_out_of_range_timeline() {
        let (app, model) = test_app(ScriptedModel::new().reply("unused"));
        let (status, _) = send(
            &app,
            post_json(
                "/api/v1/roadmap",
                json!({"current_profile": "Student", "target_role": "ML Engineer", "timeline_weeks": 20}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(model.call_count(), 0);
    }

    const BOUNDARY: &str = "mentor-test-boundary";

    fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match file_name {
                Some(file) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(content.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/screener/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request")
    }

    #[tokio::test]
    async fn screener_reads_text_upload() {
        let (app, model) = test_app(
            ScriptedModel::new().reply("### 1. Match Score\n81%\n### 2. Missing Keywords\n- Docker\n"),
        );
        let request = multipart_request(&[
            ("resume", Some("resume.txt"), "Jane Doe\nPython, SQL"),
            ("job_description", None, "Backend engineer with Docker"),
        ]);

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_score"], 81);
        assert_eq!(body["missing_keywords"], json!(["Docker"]));
        assert!(model.requests()[0].message.contains("Python, SQL"));
    }

    #[tokio::test]
    async fn screener_uses_pasted_text_without_upload() {
        let (app, model) = test_app(ScriptedModel::new().reply("no structure"));
        let request = multipart_request(&[
            ("resume_text", None, "Pasted resume body"),
            ("job_description", None, "Data Scientist"),
        ]);

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["match_score"].is_null());
        assert!(model.requests()[0].message.contains("Pasted resume body"));
    }

    #[tokio::test]
    async fn screener_rejects_unsupported_format() {
        let (app, model) = test_app(ScriptedModel::new().reply("unused"));
        let request = multipart_request(&[
            ("resume", Some("resume.docx"), "PK\x03\x04binary"),
            ("job_description", None, "Data Scientist"),
        ]);

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNREADABLE_DOCUMENT");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn screener_requires_job_description() {
        let (app, _) = test_app(ScriptedModel::new());
        let request = multipart_request(&[("resume_text", None, "Pasted resume body")]);
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn screener_rejects_oversized_upload() {
        let (app, _) = test_app(ScriptedModel::new());
        let big = "a".repeat(2048);
        let request = multipart_request(&[
            ("resume", Some("resume.txt"), big.as_str()),
            ("job_description", None, "Data Scientist"),
        ]);
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
