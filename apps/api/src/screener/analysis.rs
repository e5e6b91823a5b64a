//! Best-effort extraction of the headline numbers from the screener's markdown.
//!
//! The model owns the evaluation; these helpers only read back what it wrote
//! so the dashboard can show a metric and a keyword list. Anything that cannot
//! be found is `None` / empty rather than an error.

use serde::Serialize;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, MARKDOWN_OUTPUT_INSTRUCTION};
use crate::llm_client::{ChatModel, ChatRequest};
use crate::screener::prompts::SCREENER_PROMPT_TEMPLATE;

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub analysis_markdown: String,
    pub match_score: Option<u8>,
    pub missing_keywords: Vec<String>,
}

/// Evaluates résumé text against a job description with one model call.
pub async fn screen_resume(
    model: &dyn ChatModel,
    resume_text: &str,
    job_description: &str,
) -> Result<ScreeningReport, AppError> {
    let prompt = fill_template(
        SCREENER_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_description", job_description),
            ("markdown_instruction", MARKDOWN_OUTPUT_INSTRUCTION),
        ],
    );

    let analysis_markdown = model.complete(ChatRequest::single_shot(&prompt)).await?;

    Ok(ScreeningReport {
        match_score: extract_match_score(&analysis_markdown),
        missing_keywords: extract_missing_keywords(&analysis_markdown),
        analysis_markdown,
    })
}

/// Lines under the first markdown heading containing `title` (case-insensitive),
/// up to the next heading.
fn section<'a>(markdown: &'a str, title: &str) -> Vec<&'a str> {
    let title = title.to_lowercase();
    let mut lines = markdown.lines();
    let found = lines
        .by_ref()
        .any(|line| is_heading(line) && line.to_lowercase().contains(&title));
    if !found {
        return Vec::new();
    }
    lines.take_while(|line| !is_heading(line)).collect()
}

fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// First `NN%` or `NN/100` under the Match Score heading.
pub fn extract_match_score(markdown: &str) -> Option<u8> {
    section(markdown, "match score")
        .into_iter()
        .find_map(score_in_line)
}

fn score_in_line(line: &str) -> Option<u8> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // "72.5" is one number, never "72" followed by "5".
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        let rest = line[i..].trim_start();
        if rest.starts_with('%') || rest.starts_with("/100") {
            if let Ok(value) = line[start..i].parse::<f64>() {
                if value <= 100.0 {
                    return Some(value.trunc() as u8);
                }
            }
        }
    }
    None
}

/// Keywords listed under the Missing Keywords heading, as bullets or a
/// comma-separated line. Order is kept, duplicates dropped.
pub fn extract_missing_keywords(markdown: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for line in section(markdown, "missing keywords") {
        let line = strip_list_marker(line.trim());
        for item in line.split(',') {
            let item = item
                .trim()
                .trim_matches(|c| matches!(c, '*' | '`' | '_' | '.'))
                .trim();
            if item.is_empty() {
                continue;
            }
            if !keywords.iter().any(|k| k.eq_ignore_ascii_case(item)) {
                keywords.push(item.to_string());
            }
        }
    }
    keywords
}

fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("+ "))
    {
        return rest;
    }
    // "1. Docker" / "2) Kubernetes"
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..]
            .strip_prefix(". ")
            .or_else(|| line[digits..].strip_prefix(") "))
        {
            return rest;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::ScriptedModel;

    const REPORT: &str = "### 1. Match Score\n\
        **72%** — solid backend overlap, light on infrastructure.\n\
        \n\
        ### 2. Missing Keywords\n\
        - **Docker**\n\
        - Kubernetes\n\
        - System Design\n\
        - docker\n\
        \n\
        ### 3. Profile Summary\n\
        Strong Python developer with 4 years of experience. Needs 100% more cloud.\n\
        \n\
        ### 4. Improvement Recommendations\n\
        - Add a Projects section.\n";

    #[test]
    fn test_extracts_percentage_score() {
        assert_eq!(extract_match_score(REPORT), Some(72));
    }

    #[test]
    fn test_decimal_percentage_is_truncated_not_split() {
        let md = "### 1. Match Score\n72.5%\n### 2. Missing Keywords\n- Go\n";
        assert_eq!(extract_match_score(md), Some(72));
    }

    #[test]
    fn test_decimal_out_of_ten_is_skipped_for_percentage() {
        let md = "### Match Score\nScore: 8.5/10 (85%)\n";
        assert_eq!(extract_match_score(md), Some(85));
    }

    #[test]
    fn test_sentence_ending_number_is_not_a_fraction() {
        let md = "### Match Score\nRated 64/100. Needs work.\n";
        assert_eq!(extract_match_score(md), Some(64));
    }

    #[test]
    fn test_extracts_out_of_100_score() {
        let md = "## Match Score\nOverall: 64 / 100\n";
        assert_eq!(extract_match_score(md), Some(64));
    }

    #[test]
    fn test_score_ignores_numbers_outside_section_and_without_unit() {
        let md = "Intro says 99%\n### Match Score\nAbout 4 years match.\n### Missing Keywords\n- Go\n";
        assert_eq!(extract_match_score(md), None);
    }

    #[test]
    fn test_extracts_bulleted_keywords_deduplicated() {
        assert_eq!(
            extract_missing_keywords(REPORT),
            ["Docker", "Kubernetes", "System Design"]
        );
    }

    #[test]
    fn test_extracts_comma_separated_and_numbered_keywords() {
        let md = "### Missing Keywords\nDocker, Kubernetes, `Terraform`\n1. GraphQL\n2) gRPC\n### Profile Summary\n";
        assert_eq!(
            extract_missing_keywords(md),
            ["Docker", "Kubernetes", "Terraform", "GraphQL", "gRPC"]
        );
    }

    #[test]
    fn test_missing_sections_yield_nothing() {
        let md = "The model ignored the requested format.";
        assert_eq!(extract_match_score(md), None);
        assert!(extract_missing_keywords(md).is_empty());
    }

    #[tokio::test]
    async fn test_screen_resume_sends_single_shot_prompt() {
        let model = ScriptedModel::new().reply(REPORT);

        let report = screen_resume(&model, "Jane Doe, Python", "Backend engineer, Docker")
            .await
            .unwrap();

        assert_eq!(report.match_score, Some(72));
        assert_eq!(report.analysis_markdown, REPORT);
        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].history.is_empty());
        assert!(requests[0].message.contains("Jane Doe, Python"));
        assert!(requests[0].message.contains("Backend engineer, Docker"));
        assert!(requests[0].message.contains("### 2. Missing Keywords"));
    }

    #[tokio::test]
    async fn test_resume_containing_placeholder_is_not_spliced() {
        let model = ScriptedModel::new().reply(REPORT);

        screen_resume(&model, "Skills: {job_description}", "Staff Rust engineer")
            .await
            .unwrap();

        let message = &model.requests()[0].message;
        assert!(message.contains("Skills: {job_description}"));
        assert_eq!(message.matches("Staff Rust engineer").count(), 1);
    }

    #[tokio::test]
    async fn test_screen_resume_model_failure() {
        let model = ScriptedModel::new().fail();
        let err = screen_resume(&model, "r", "jd").await.unwrap_err();
        assert!(matches!(err, AppError::ModelCallFailed(_)));
    }
}
