use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// What a stored document holds. Persisted as snake_case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::JobDescription => "job_description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::JobDescription => "Job description",
        }
    }
}

impl TryFrom<String> for DocumentKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "resume" => Ok(DocumentKind::Resume),
            "job_description" => Ok(DocumentKind::JobDescription),
            _ => Err(format!("unknown document kind '{value}'")),
        }
    }
}

/// A resume or job description reduced to its plain text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRow {
    pub id: Uuid,
    #[sqlx(try_from = "String")]
    pub kind: DocumentKind,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A stored match report, keyed by the two documents it compared.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysisRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub job_description_id: Uuid,
    pub scorer_backend: String,
    pub report: Value,
    pub created_at: DateTime<Utc>,
}
