//! Axum route handlers for the Match Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::documents::store::{get_document, insert_match_analysis};
use crate::errors::AppError;
use crate::matching::report::MatchReport;
use crate::models::document::DocumentKind;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysisRequest {
    pub resume_id: Uuid,
    pub job_description_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPreviewRequest {
    pub resume_text: String,
    pub job_description_text: String,
}

/// POST /api/v1/match-analysis
///
/// Scores a stored resume against a stored job description and keeps the
/// report alongside the two documents.
pub async fn handle_match_analysis(
    State(state): State<AppState>,
    Json(request): Json<MatchAnalysisRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let resume = get_document(&state.db, DocumentKind::Resume, request.resume_id).await?;
    let job_description =
        get_document(&state.db, DocumentKind::JobDescription, request.job_description_id).await?;

    let report = state
        .match_scorer
        .score(&resume.content, &job_description.content)
        .await?;

    let stored = insert_match_analysis(
        &state.db,
        resume.id,
        job_description.id,
        state.match_scorer.backend().as_str(),
        &report,
    )
    .await?;

    info!(
        analysis_id = %stored.id,
        resume_id = %resume.id,
        job_description_id = %job_description.id,
        score = report.score,
        backend = state.match_scorer.backend().as_str(),
        "Match analysis stored"
    );

    Ok(Json(report))
}

/// POST /api/v1/match-analysis/preview
///
/// Scores raw text without reading or writing storage. Either text may be empty.
pub async fn handle_match_preview(
    State(state): State<AppState>,
    Json(request): Json<MatchPreviewRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let report = state
        .match_scorer
        .score(&request.resume_text, &request.job_description_text)
        .await?;
    Ok(Json(report))
}
