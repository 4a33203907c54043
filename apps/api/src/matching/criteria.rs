//! Criterion scorers. Each returns an unrounded value in [0, 100].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::keywords::KeywordPartition;

/// Named text checks shared by the criterion scorers and the diagnostics.
pub struct ResumePatterns {
    pub section_headers: Regex,
    pub years_of_experience: Regex,
    pub education: Regex,
    pub achievements: Regex,
}

// ASCII-only digits, whitespace and case folding, like the keyword word class.
pub static PATTERNS: Lazy<ResumePatterns> = Lazy::new(|| ResumePatterns {
    section_headers: Regex::new(r"(?i-u)education|experience|skills").unwrap(),
    years_of_experience: Regex::new(r"(?i-u)[0-9]+\s*years?\s*experience").unwrap(),
    education: Regex::new(r"(?i-u)education|degree|certification").unwrap(),
    achievements: Regex::new(r"(?i-u)achievements?|accomplishments?").unwrap(),
});

/// A blank line between paragraphs.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Length bounds (exclusive) for a well-sized resume, in Unicode scalar values.
/// Characters outside the BMP (emoji) count once, not as two UTF-16 units.
pub const MIN_RESUME_CHARS: usize = 200;
pub const MAX_RESUME_CHARS: usize = 5000;

const SECTION_HEADERS_POINTS: f64 = 33.0;
const PARAGRAPH_BREAK_POINTS: f64 = 33.0;
const LENGTH_POINTS: f64 = 34.0;

pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub fn has_section_headers(resume_text: &str) -> bool {
    PATTERNS.section_headers.is_match(resume_text)
}

pub fn has_paragraph_break(resume_text: &str) -> bool {
    resume_text.contains(PARAGRAPH_BREAK)
}

pub fn mentions_education(resume_text: &str) -> bool {
    PATTERNS.education.is_match(resume_text)
}

pub fn mentions_achievements(resume_text: &str) -> bool {
    PATTERNS.achievements.is_match(resume_text)
}

pub fn states_years_of_experience(resume_text: &str) -> bool {
    PATTERNS.years_of_experience.is_match(resume_text)
}

/// Percentage of `part` over `whole`; an empty `whole` scores 0.
pub fn ratio_percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Share of JD keywords that appear as whole keywords in the resume.
pub fn keyword_match_score(partition: &KeywordPartition) -> f64 {
    ratio_percent(partition.found.len(), partition.total())
}

/// Same exact-token ratio as [`keyword_match_score`], reported as its own criterion.
pub fn skills_alignment_score(partition: &KeywordPartition) -> f64 {
    ratio_percent(partition.found.len(), partition.total())
}

/// Share of JD keywords found anywhere in the lower-cased resume, substrings included.
pub fn experience_relevance_score(resume_text: &str, job_keywords: &[String]) -> f64 {
    let resume_lower = resume_text.to_lowercase();
    let contained = job_keywords
        .iter()
        .filter(|keyword| resume_lower.contains(&keyword.to_lowercase()))
        .count();
    ratio_percent(contained, job_keywords.len())
}

/// Structure score: section headers, paragraph spacing and overall length.
pub fn formatting_score(resume_text: &str) -> f64 {
    let mut score = 0.0;
    if has_section_headers(resume_text) {
        score += SECTION_HEADERS_POINTS;
    }
    if has_paragraph_break(resume_text) {
        score += PARAGRAPH_BREAK_POINTS;
    }
    let len = text_len(resume_text);
    if len > MIN_RESUME_CHARS && len < MAX_RESUME_CHARS {
        score += LENGTH_POINTS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::keywords::partition_keywords;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ratio_percent_empty_whole_is_zero() {
        assert_eq!(ratio_percent(0, 0), 0.0);
        assert_eq!(ratio_percent(3, 0), 0.0);
    }

    #[test]
    fn test_keyword_and_skills_scores_agree() {
        let partition = partition_keywords(&kw(&["Rust", "Go", "Kafka"]), &kw(&["Rust"]));
        let keyword = keyword_match_score(&partition);
        assert!((keyword - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(keyword, skills_alignment_score(&partition));
    }

    #[test]
    fn test_experience_relevance_uses_substrings() {
        // "Java" is only present inside "javascript".
        let score = experience_relevance_score("Built javascript tooling", &kw(&["Java", "Tooling"]));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_experience_relevance_empty_keywords() {
        assert_eq!(experience_relevance_score("anything", &[]), 0.0);
    }

    #[test]
    fn test_formatting_score_full_marks() {
        let resume = format!("Experience\n\n{}", "x".repeat(300));
        assert_eq!(formatting_score(&resume), 100.0);
    }

    #[test]
    fn test_formatting_score_empty_is_zero() {
        assert_eq!(formatting_score(""), 0.0);
    }

    #[test]
    fn test_formatting_length_bounds_are_exclusive() {
        assert_eq!(formatting_score(&"x".repeat(MIN_RESUME_CHARS)), 0.0);
        assert_eq!(formatting_score(&"x".repeat(MIN_RESUME_CHARS + 1)), 34.0);
        assert_eq!(formatting_score(&"x".repeat(MAX_RESUME_CHARS - 1)), 34.0);
        assert_eq!(formatting_score(&"x".repeat(MAX_RESUME_CHARS)), 0.0);
    }

    #[test]
    fn test_section_headers_case_insensitive() {
        assert!(has_section_headers("TECHNICAL SKILLS"));
        assert!(!has_section_headers("Projects"));
    }

    #[test]
    fn test_patterns_ignore_non_ascii_digits_and_case_folds() {
        assert!(!states_years_of_experience("\u{665} years experience"));
        assert!(!has_section_headers("S\u{212A}ILLS"));
        assert_eq!(formatting_score("S\u{212A}ILLS"), 0.0);
        assert!(has_section_headers("SKILLS"));
    }

    #[test]
    fn test_text_len_counts_scalar_values() {
        assert_eq!(text_len("\u{1F600}"), 1);
        let resume = format!("{}\u{1F600}", "x".repeat(MIN_RESUME_CHARS - 1));
        assert_eq!(text_len(&resume), MIN_RESUME_CHARS);
        assert_eq!(formatting_score(&resume), 0.0);
    }

    #[test]
    fn test_years_of_experience_pattern() {
        assert!(states_years_of_experience("10 years experience"));
        assert!(states_years_of_experience("1year Experience"));
        assert!(!states_years_of_experience("many years of experience"));
    }
}
