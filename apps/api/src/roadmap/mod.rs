// Skill Roadmap: a week-by-week learning plan from one model call.

pub mod generator;
pub mod handlers;
pub mod prompts;
