use serde::{Deserialize, Serialize};

/// Per-criterion sub-scores, each 0 – 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaScores {
    pub keyword_match: u32,
    pub formatting: u32,
    pub skills_alignment: u32,
    pub experience_relevance: u32,
}

impl CriteriaScores {
    fn all(&self) -> [u32; 4] {
        [
            self.keyword_match,
            self.formatting,
            self.skills_alignment,
            self.experience_relevance,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub keywords_found: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Result of one resume vs job-description scoring run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub score: u32, // 0 – 100
    pub criteria_scores: CriteriaScores,
    pub analysis: Analysis,
    pub recommendations: Vec<String>,
    pub summary: String,
}

impl MatchReport {
    /// True when the overall score and every criterion lie in 0 – 100.
    pub fn scores_in_range(&self) -> bool {
        self.score <= 100 && self.criteria_scores.all().iter().all(|s| *s <= 100)
    }
}

/// Rounds an unrounded percentage into a report score.
pub fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_serializes_with_camel_case_fields() {
        let report = MatchReport {
            score: 50,
            criteria_scores: CriteriaScores {
                keyword_match: 40,
                formatting: 66,
                skills_alignment: 40,
                experience_relevance: 54,
            },
            analysis: Analysis {
                keywords_found: vec!["Rust".to_string()],
                missing_keywords: vec!["Kafka".to_string()],
                ..Default::default()
            },
            recommendations: vec![],
            summary: "ok".to_string(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "score": 50,
                "criteriaScores": {
                    "keywordMatch": 40,
                    "formatting": 66,
                    "skillsAlignment": 40,
                    "experienceRelevance": 54
                },
                "analysis": {
                    "keywordsFound": ["Rust"],
                    "missingKeywords": ["Kafka"],
                    "formattingIssues": [],
                    "strengths": [],
                    "weaknesses": []
                },
                "recommendations": [],
                "summary": "ok"
            })
        );
    }

    #[test]
    fn test_to_score_rounds_half_up() {
        assert_eq!(to_score(33.25), 33);
        assert_eq!(to_score(66.5), 67);
        assert_eq!(to_score(100.0 / 3.0), 33);
    }

    #[test]
    fn test_scores_in_range_rejects_overflow() {
        let mut report = MatchReport::default();
        assert!(report.scores_in_range());
        report.criteria_scores.formatting = 101;
        assert!(!report.scores_in_range());
    }
}
