// Prompt constants for the LLM-backed match scorer.

/// System prompt for match analysis; enforces JSON-only output.
pub const MATCH_ANALYSIS_SYSTEM: &str = "You are an expert technical recruiter and \
    applicant-tracking-system analyst comparing a resume against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Match analysis prompt template. Replace `{resume_text}` and `{job_description_text}`.
pub const MATCH_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze how well the resume below matches the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 72,
  "criteriaScores": {
    "keywordMatch": 70,
    "formatting": 80,
    "skillsAlignment": 65,
    "experienceRelevance": 75
  },
  "analysis": {
    "keywordsFound": ["Python", "Sql"],
    "missingKeywords": ["Docker"],
    "formattingIssues": ["Improve spacing between sections"],
    "strengths": ["Clearly stated years of experience"],
    "weaknesses": ["Could highlight more specific achievements"]
  },
  "recommendations": ["Add missing keywords: Docker"],
  "summary": "Your resume matches 72% of the job requirements. ..."
}

Rules:
- Every score is an integer from 0 to 100.
- "score" is the rounded mean of the four criteria scores.
- "keywordsFound" and "missingKeywords" only contain terms from the job description.
- "summary" is one paragraph and states the match percentage.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description_text}"#;

pub fn build_match_prompt(resume_text: &str, job_description_text: &str) -> String {
    fill_template(
        MATCH_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("{resume_text}", resume_text),
            ("{job_description_text}", job_description_text),
        ],
    )
}

/// Substitutes placeholders in one left-to-right pass over the template.
/// Inserted values are never scanned for placeholders.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let next = values
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|at| (at, *key, *value)))
            .min_by_key(|(at, _, _)| *at);

        let Some((at, key, value)) = next else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + key.len()..];
    }
}
