//! Document and match-report persistence.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::report::MatchReport;
use crate::models::document::{DocumentKind, DocumentRow, MatchAnalysisRow};

pub async fn insert_document(
    pool: &PgPool,
    kind: DocumentKind,
    title: &str,
    content: &str,
) -> Result<DocumentRow, AppError> {
    let row = sqlx::query_as::<_, DocumentRow>(
        r#"
        INSERT INTO documents (id, kind, title, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, kind, title, content, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(kind.as_str())
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Loads a document of the given kind. An id of the other kind is reported as not found.
pub async fn get_document(
    pool: &PgPool,
    kind: DocumentKind,
    id: Uuid,
) -> Result<DocumentRow, AppError> {
    sqlx::query_as::<_, DocumentRow>(
        "SELECT id, kind, title, content, created_at FROM documents WHERE id = $1 AND kind = $2",
    )
    .bind(id)
    .bind(kind.as_str())
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("{} {id} not found", kind.label())))
}

pub async fn insert_match_analysis(
    pool: &PgPool,
    resume_id: Uuid,
    job_description_id: Uuid,
    scorer_backend: &str,
    report: &MatchReport,
) -> Result<MatchAnalysisRow, AppError> {
    let report_json = serde_json::to_value(report)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode match report: {e}")))?;

    let row = sqlx::query_as::<_, MatchAnalysisRow>(
        r#"
        INSERT INTO match_analyses (id, resume_id, job_description_id, scorer_backend, report)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume_id)
    .bind(job_description_id)
    .bind(scorer_backend)
    .bind(report_json)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
