//! Match scoring: pluggable, trait-based scorer comparing a resume to a job description.
//!
//! Default: `KeywordMatchScorer` (pure-Rust, deterministic, no I/O).
//! Alternative: `LlmMatchScorer` (Claude), which falls back to the keyword scorer
//! whenever the model call or its output is unusable.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup via config.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::matching::criteria::{
    experience_relevance_score, formatting_score, keyword_match_score, skills_alignment_score,
};
use crate::matching::diagnostics;
use crate::matching::keywords::{extract_keywords, partition_keywords};
use crate::matching::prompts::{build_match_prompt, MATCH_ANALYSIS_SYSTEM};
use crate::matching::report::{to_score, Analysis, CriteriaScores, MatchReport};

/// Which scorer produced a report. Logged, never serialized into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    Keyword,
    Llm,
}

impl ScorerBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerBackend::Keyword => "keyword",
            ScorerBackend::Llm => "llm",
        }
    }
}

/// The match scorer trait. Implement this to swap backends without touching
/// the endpoint or handler code.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    fn backend(&self) -> ScorerBackend;

    async fn score(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<MatchReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic keyword-heuristic scorer. Never fails.
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    fn backend(&self) -> ScorerBackend {
        ScorerBackend::Keyword
    }

    async fn score(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<MatchReport, AppError> {
        Ok(analyze_match(resume_text, job_description_text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Semantic scorer via Claude, with the keyword scorer as fallback.
pub struct LlmMatchScorer {
    llm: LlmClient,
}

impl LlmMatchScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn score_with_llm(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<MatchReport, AppError> {
        let prompt = build_match_prompt(resume_text, job_description_text);
        let report: MatchReport = self
            .llm
            .call_json(&prompt, MATCH_ANALYSIS_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Match analysis failed: {e}")))?;
        validate_llm_report(report)
    }
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    fn backend(&self) -> ScorerBackend {
        ScorerBackend::Llm
    }

    async fn score(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<MatchReport, AppError> {
        match self.score_with_llm(resume_text, job_description_text).await {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!("LLM match scoring unavailable, using keyword scorer: {e}");
                Ok(analyze_match(resume_text, job_description_text))
            }
        }
    }
}

/// Rejects model output whose scores fall outside 0 – 100.
fn validate_llm_report(report: MatchReport) -> Result<MatchReport, AppError> {
    if !report.scores_in_range() {
        return Err(AppError::Llm(format!(
            "LLM returned out-of-range scores (score {})",
            report.score
        )));
    }
    Ok(report)
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against a job description.
///
/// Algorithm:
/// 1. Extract keywords from both texts and partition the JD keywords into
///    found / missing by case-insensitive membership in the resume keywords.
/// 2. Score four criteria in [0, 100]: keyword match, formatting, skills
///    alignment and experience relevance (substring containment).
/// 3. Overall score = round(mean of the four unrounded criteria).
/// 4. Derive diagnostics, recommendations and summary from the same inputs.
///
/// An empty JD keyword set scores 0 on every ratio criterion.
pub fn analyze_match(resume_text: &str, job_description_text: &str) -> MatchReport {
    let job_keywords = extract_keywords(job_description_text);
    let resume_keywords = extract_keywords(resume_text);
    let partition = partition_keywords(&job_keywords, &resume_keywords);

    let keyword_match = keyword_match_score(&partition);
    let formatting = formatting_score(resume_text);
    let skills_alignment = skills_alignment_score(&partition);
    let experience_relevance = experience_relevance_score(resume_text, &job_keywords);

    let score = to_score((keyword_match + formatting + skills_alignment + experience_relevance) / 4.0);

    debug!(
        job_keywords = job_keywords.len(),
        found = partition.found.len(),
        missing = partition.missing.len(),
        score,
        "Keyword match computed"
    );

    let formatting_issues = diagnostics::formatting_issues(resume_text);
    let strengths = diagnostics::strengths(resume_text, &partition);
    let weaknesses = diagnostics::weaknesses(resume_text, &partition);
    let recommendations = diagnostics::recommendations(resume_text, &partition);
    let summary = diagnostics::summary(&partition);

    MatchReport {
        score,
        criteria_scores: CriteriaScores {
            keyword_match: to_score(keyword_match),
            formatting: to_score(formatting),
            skills_alignment: to_score(skills_alignment),
            experience_relevance: to_score(experience_relevance),
        },
        analysis: Analysis {
            keywords_found: partition.found,
            missing_keywords: partition.missing,
            formatting_issues,
            strengths,
            weaknesses,
        },
        recommendations,
        summary,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str =
        "I have 5 years experience in Python and SQL. Education: BS Computer Science.";
    const JOB: &str = "Looking for a Python developer with SQL and Docker skills.";

    fn full_resume() -> String {
        format!(
            "Experience\n\nSenior engineer with 8 years experience building Rust and Kafka \
             pipelines on Kubernetes.\n\nAchievements\n\nCut p99 latency by 40%.\n\n\
             Education\n\nBSc Computer Science. {}",
            "Led migrations across many services. ".repeat(5)
        )
    }

    #[test]
    fn test_concrete_python_sql_docker_scenario() {
        let report = analyze_match(RESUME, JOB);

        assert_eq!(report.analysis.keywords_found, vec!["Python", "Sql"]);
        assert_eq!(
            report.analysis.missing_keywords,
            vec!["Looking", "Developer", "Docker", "Skills"]
        );
        assert_eq!(report.criteria_scores.keyword_match, 33);
        assert_eq!(report.criteria_scores.skills_alignment, 33);
        assert_eq!(report.criteria_scores.experience_relevance, 33);
        // Section header + length < 200 fails, no blank line.
        assert_eq!(report.criteria_scores.formatting, 33);
        assert_eq!(report.score, 33);

        assert_eq!(
            report.analysis.formatting_issues,
            vec!["Improve spacing between sections", "Resume is too short"]
        );
        assert_eq!(
            report.analysis.strengths,
            vec!["Clearly stated years of experience", "Relevant educational background"]
        );
        assert_eq!(
            report.analysis.weaknesses,
            vec![
                "Missing several key job requirements",
                "Resume might be too brief",
                "Could highlight more specific achievements",
            ]
        );
        assert!(report.recommendations.iter().any(|r| r.contains("Docker")));
        assert_eq!(
            report.summary,
            "Your resume matches 33% of the job requirements. Consider updating your resume to better align with the job requirements."
        );
    }

    #[test]
    fn test_empty_inputs_score_zero_everywhere() {
        let report = analyze_match("", "");
        assert_eq!(report.criteria_scores, CriteriaScores::default());
        assert_eq!(report.score, 0);
        assert!(report.analysis.keywords_found.is_empty());
        assert!(report.analysis.missing_keywords.is_empty());
        assert!(report.summary.contains("0%"));
    }

    #[test]
    fn test_partition_covers_every_job_keyword() {
        let job = "Rust rust Kafka, Kubernetes and the Kafka streams team";
        let report = analyze_match("Rust on kubernetes", job);

        let mut combined = report.analysis.keywords_found.clone();
        combined.extend(report.analysis.missing_keywords.clone());
        let mut expected = extract_keywords(job);
        combined.sort();
        expected.sort();
        assert_eq!(combined, expected);

        for found in &report.analysis.keywords_found {
            assert!(!report
                .analysis
                .missing_keywords
                .iter()
                .any(|m| m.eq_ignore_ascii_case(found)));
        }
    }

    #[test]
    fn test_keyword_match_invariant() {
        let job = "Rust Kafka Kubernetes Terraform Postgres Redis";
        let report = analyze_match(&full_resume(), job);
        let total = extract_keywords(job).len() as f64;
        let expected = (report.analysis.keywords_found.len() as f64 / total * 100.0).round() as u32;
        assert_eq!(report.criteria_scores.keyword_match, expected);
    }

    #[test]
    fn test_scores_bounded_for_varied_inputs() {
        let long = "word ".repeat(3000);
        let cases = [
            ("", "Rust"),
            ("Rust", ""),
            (long.as_str(), "word word word"),
            ("日本語の履歴書", "ソフトウェア エンジニア"),
            ("!!!???", "###"),
        ];
        for (resume, job) in cases {
            let report = analyze_match(resume, job);
            assert!(report.scores_in_range(), "out of range for job {job:?}");
        }
    }

    #[test]
    fn test_adding_missing_keywords_raises_keyword_match() {
        let before = analyze_match(RESUME, JOB);
        let patched = format!("{RESUME} {}", before.analysis.missing_keywords.join(" "));
        let after = analyze_match(&patched, JOB);

        assert!(after.criteria_scores.keyword_match > before.criteria_scores.keyword_match);
        assert_eq!(after.criteria_scores.keyword_match, 100);
        assert!(after.criteria_scores.skills_alignment >= before.criteria_scores.skills_alignment);
        assert!(after.analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let first = serde_json::to_string(&analyze_match(&full_resume(), JOB)).unwrap();
        let second = serde_json::to_string(&analyze_match(&full_resume(), JOB)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_strong_resume_gets_strong_summary() {
        let job = "Rust Kafka Kubernetes engineer";
        let report = analyze_match(&full_resume(), job);
        assert_eq!(report.criteria_scores.keyword_match, 100);
        assert_eq!(report.criteria_scores.formatting, 100);
        assert!(report
            .analysis
            .strengths
            .contains(&"Strong keyword alignment with job requirements".to_string()));
        assert!(report.summary.contains("strong candidate"));
        assert!(report.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_keyword_scorer_trait_matches_pure_function() {
        let scorer = KeywordMatchScorer;
        let report = scorer.score(RESUME, JOB).await.unwrap();
        assert_eq!(report, analyze_match(RESUME, JOB));
        assert_eq!(scorer.backend().as_str(), "keyword");
    }

    #[test]
    fn test_validate_llm_report_rejects_out_of_range() {
        let mut report = analyze_match(RESUME, JOB);
        assert!(validate_llm_report(report.clone()).is_ok());
        report.score = 140;
        assert!(matches!(validate_llm_report(report), Err(AppError::Llm(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_llm_scorer_falls_back_when_unreachable() {
        let llm = LlmClient::with_base_url("test-key".to_string(), "http://127.0.0.1:9/v1/messages");
        let scorer = LlmMatchScorer::new(llm);

        let report = scorer.score(RESUME, JOB).await.unwrap();
        assert_eq!(report, analyze_match(RESUME, JOB));
        assert_eq!(scorer.backend(), ScorerBackend::Llm);
    }
}
