//! Axum route handlers for stored resumes and job descriptions.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::documents::extract::{detect_format, extract_text};
use crate::documents::store::{get_document, insert_document};
use crate::errors::AppError;
use crate::models::document::{DocumentKind, DocumentRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub content: String,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentRow>), AppError> {
    create_document(&state, DocumentKind::Resume, request).await
}

/// POST /api/v1/job-descriptions
pub async fn handle_create_job_description(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentRow>), AppError> {
    create_document(&state, DocumentKind::JobDescription, request).await
}

/// POST /api/v1/resumes/upload
///
/// Multipart form: `file` (PDF or plain text), optional `title`.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentRow>), AppError> {
    upload_document(&state, DocumentKind::Resume, multipart).await
}

/// POST /api/v1/job-descriptions/upload
pub async fn handle_upload_job_description(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentRow>), AppError> {
    upload_document(&state, DocumentKind::JobDescription, multipart).await
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentRow>, AppError> {
    Ok(Json(get_document(&state.db, DocumentKind::Resume, id).await?))
}

/// GET /api/v1/job-descriptions/:id
pub async fn handle_get_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentRow>, AppError> {
    Ok(Json(
        get_document(&state.db, DocumentKind::JobDescription, id).await?,
    ))
}

async fn create_document(
    state: &AppState,
    kind: DocumentKind,
    request: CreateDocumentRequest,
) -> Result<(StatusCode, Json<DocumentRow>), AppError> {
    validate_document(&request.title, &request.content)?;

    let row = insert_document(&state.db, kind, request.title.trim(), &request.content).await?;
    info!(id = %row.id, kind = kind.as_str(), "Document stored");

    Ok((StatusCode::CREATED, Json(row)))
}

async fn upload_document(
    state: &AppState,
    kind: DocumentKind,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentRow>), AppError> {
    let mut title: Option<String> = None;
    let mut upload: Option<(Option<String>, Option<String>, bytes::Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => title = Some(field.text().await?),
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                upload = Some((file_name, content_type, field.bytes().await?));
            }
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let format = detect_format(file_name.as_deref(), content_type.as_deref()).ok_or_else(|| {
        AppError::Validation("Unsupported file type; upload a PDF or plain text file".to_string())
    })?;

    // PDF parsing is CPU-bound; keep it off the async workers.
    let content = tokio::task::spawn_blocking(move || extract_text(format, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Text extraction task failed: {e}")))??;

    let title = title
        .filter(|t| !t.trim().is_empty())
        .or(file_name)
        .unwrap_or_else(|| format!("Untitled {}", kind.label().to_lowercase()));

    create_document(state, kind, CreateDocumentRequest { title, content }).await
}

fn validate_document(title: &str, content: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    Ok(())
}
