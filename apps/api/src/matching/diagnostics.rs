//! Human-readable diagnostics derived from the resume and keyword partition.

use crate::matching::criteria::{
    has_paragraph_break, has_section_headers, mentions_achievements, mentions_education,
    states_years_of_experience, text_len, MAX_RESUME_CHARS, MIN_RESUME_CHARS,
};
use crate::matching::keywords::KeywordPartition;
use crate::matching::report::to_score;

/// Found share above which alignment counts as a strength.
const STRONG_ALIGNMENT_RATIO: f64 = 0.7;
/// Missing share above which gaps count as a weakness.
const MISSING_REQUIREMENTS_RATIO: f64 = 0.3;
/// Resumes shorter than this read as brief.
const BRIEF_RESUME_CHARS: usize = 300;
/// Match percentage at which the summary calls the candidate strong.
const STRONG_CANDIDATE_PERCENT: u32 = 70;

pub fn formatting_issues(resume_text: &str) -> Vec<String> {
    let mut issues = Vec::new();
    let len = text_len(resume_text);

    if !has_section_headers(resume_text) {
        issues.push("Missing key sections (Education, Experience, or Skills)".to_string());
    }
    if !has_paragraph_break(resume_text) {
        issues.push("Improve spacing between sections".to_string());
    }
    if len < MIN_RESUME_CHARS {
        issues.push("Resume is too short".to_string());
    }
    if len > MAX_RESUME_CHARS {
        issues.push("Resume is too long".to_string());
    }
    issues
}

pub fn strengths(resume_text: &str, partition: &KeywordPartition) -> Vec<String> {
    let mut strengths = Vec::new();

    if partition.found.len() as f64 > partition.total() as f64 * STRONG_ALIGNMENT_RATIO {
        strengths.push("Strong keyword alignment with job requirements".to_string());
    }
    if states_years_of_experience(resume_text) {
        strengths.push("Clearly stated years of experience".to_string());
    }
    if mentions_education(resume_text) {
        strengths.push("Relevant educational background".to_string());
    }
    strengths
}

pub fn weaknesses(resume_text: &str, partition: &KeywordPartition) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if partition.missing.len() as f64 > partition.total() as f64 * MISSING_REQUIREMENTS_RATIO {
        weaknesses.push("Missing several key job requirements".to_string());
    }
    if text_len(resume_text) < BRIEF_RESUME_CHARS {
        weaknesses.push("Resume might be too brief".to_string());
    }
    if !mentions_achievements(resume_text) {
        weaknesses.push("Could highlight more specific achievements".to_string());
    }
    weaknesses
}

pub fn recommendations(resume_text: &str, partition: &KeywordPartition) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !partition.missing.is_empty() {
        recommendations.push(format!(
            "Add missing keywords: {}",
            partition.missing.join(", ")
        ));
    }
    if !mentions_achievements(resume_text) {
        recommendations.push("Add specific achievements and measurable results".to_string());
    }
    if !mentions_education(resume_text) {
        recommendations.push("Include relevant education or certifications.".to_string());
    }
    recommendations
}

/// Percentage of JD keywords found in the resume, rounded; 0 with no JD keywords.
pub fn match_percentage(partition: &KeywordPartition) -> u32 {
    if partition.total() == 0 {
        return 0;
    }
    to_score(partition.found.len() as f64 / partition.total() as f64 * 100.0)
}

pub fn summary(partition: &KeywordPartition) -> String {
    let percentage = match_percentage(partition);
    let verdict = if percentage >= STRONG_CANDIDATE_PERCENT {
        "You appear to be a strong candidate for this position."
    } else {
        "Consider updating your resume to better align with the job requirements."
    };
    format!("Your resume matches {percentage}% of the job requirements. {verdict}")
}
