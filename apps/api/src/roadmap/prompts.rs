// Skill Roadmap prompt templates.

/// Replace `{timeline_weeks}`, `{current_profile}`, `{target_role}` and
/// `{markdown_instruction}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Act as a Senior Technical Career Coach.
Create a detailed {timeline_weeks}-week learning roadmap to go from "{current_profile}" to "{target_role}".

Strict Requirements:
1. Break it down week by week.
2. For each week, list 2-3 specific topics to master.
3. PROVIDE FREE RESOURCES: Include actual names of YouTube channels, Coursera courses (audit mode), or Documentation links for each topic.
4. Include a small "Capstone Project" idea at the end to practice skills.

Use tables where possible. {markdown_instruction}"#;
