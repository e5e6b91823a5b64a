// Résumé Screener prompt templates.

/// Evaluation prompt. Replace `{resume_text}`, `{job_description}` and
/// `{markdown_instruction}` before sending.
pub const SCREENER_PROMPT_TEMPLATE: &str = r#"Act as a Senior Technical Recruiter and Resume Expert.

Here is a candidate's resume text:
{resume_text}

Here is the target job description:
{job_description}

Please provide a professional evaluation in the following format:

### 1. Match Score
[Give a percentage score out of 100 based on keyword matching and relevance, written like "78%"]

### 2. Missing Keywords
[List critical skills or keywords found in the JD but missing from the resume, one per bullet]

### 3. Profile Summary
[A 2-sentence summary of the candidate's fit for this specific role]

### 4. Improvement Recommendations
[3-5 bullet points on specific actionable changes to improve the resume]

{markdown_instruction}"#;
