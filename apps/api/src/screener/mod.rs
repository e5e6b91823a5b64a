// Résumé Screener: extract résumé text, evaluate it against a job description
// with a single model call, and pull the headline numbers out of the markdown.

pub mod analysis;
pub mod document;
pub mod handlers;
pub mod prompts;
