use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, MARKDOWN_OUTPUT_INSTRUCTION};
use crate::llm_client::{ChatModel, ChatRequest};
use crate::roadmap::prompts::ROADMAP_PROMPT_TEMPLATE;

pub const MIN_WEEKS: u8 = 1;
pub const MAX_WEEKS: u8 = 12;
pub const ROADMAP_FILE_NAME: &str = "my_career_roadmap.md";

fn default_timeline_weeks() -> u8 {
    4
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapRequest {
    /// Current role and skills, free text ("Student, know Python & SQL").
    pub current_profile: String,
    pub target_role: String,
    #[serde(default = "default_timeline_weeks")]
    pub timeline_weeks: u8,
}

impl RoadmapRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.current_profile.trim().is_empty() || self.target_role.trim().is_empty() {
            return Err(AppError::Validation(
                "Fill in both your current skills and target role".to_string(),
            ));
        }
        if !(MIN_WEEKS..=MAX_WEEKS).contains(&self.timeline_weeks) {
            return Err(AppError::Validation(format!(
                "timeline_weeks must be between {MIN_WEEKS} and {MAX_WEEKS}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Roadmap {
    pub roadmap_markdown: String,
    pub file_name: &'static str,
}

pub fn build_roadmap_prompt(request: &RoadmapRequest) -> String {
    let timeline_weeks = request.timeline_weeks.to_string();
    fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("timeline_weeks", timeline_weeks.as_str()),
            ("current_profile", request.current_profile.trim()),
            ("target_role", request.target_role.trim()),
            ("markdown_instruction", MARKDOWN_OUTPUT_INSTRUCTION),
        ],
    )
}

/// Validates the request and asks the model for the plan.
pub async fn generate_roadmap(
    model: &dyn ChatModel,
    request: &RoadmapRequest,
) -> Result<Roadmap, AppError> {
    request.validate()?;
    let prompt = build_roadmap_prompt(request);
    let roadmap_markdown = model.complete(ChatRequest::single_shot(&prompt)).await?;
    Ok(Roadmap {
        roadmap_markdown,
        file_name: ROADMAP_FILE_NAME,
    })
}
