// Mock interviewer prompt templates.

use crate::interview::models::InterviewConfig;
use crate::llm_client::prompts::fill_template;

/// Persona-setup instruction. Replace `{difficulty}`, `{role}`, `{topic}` before sending.
pub const PERSONA_PROMPT_TEMPLATE: &str = r#"You are an expert Technical Interviewer for a {difficulty} {role} position.
Focus heavily on {topic}.

Rules:
1. Ask only ONE question at a time.
2. Wait for the user's response.
3. After the user answers, provide brief feedback (correct/incorrect) and then ask the NEXT question.
4. Keep the tone professional but encouraging.

Start by introducing yourself and asking the first question."#;

pub fn build_persona_instruction(config: &InterviewConfig) -> String {
    let difficulty = config.difficulty.to_string();
    fill_template(
        PERSONA_PROMPT_TEMPLATE,
        &[
            ("difficulty", difficulty.as_str()),
            ("role", config.role.trim()),
            ("topic", config.topic.trim()),
        ],
    )
}
