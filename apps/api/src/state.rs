use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::interview::controller::InterviewController;
use crate::interview::registry::SessionRegistry;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The model boundary for single-shot pages (screener, roadmap).
    pub llm: Arc<dyn ChatModel>,
    pub interviewer: InterviewController,
    /// Live interview sessions, one isolated store per session id.
    pub sessions: SessionRegistry,
    pub config: Config,
}

impl AppState {
    pub fn new(llm: Arc<dyn ChatModel>, config: Config) -> Self {
        Self {
            interviewer: InterviewController::new(llm.clone()),
            llm,
            sessions: SessionRegistry::new(Duration::from_secs(config.idle_session_ttl_secs)),
            config,
        }
    }
}
