pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers as documents;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Documents
        .route("/api/v1/resumes", post(documents::handle_create_resume))
        .route(
            "/api/v1/resumes/upload",
            post(documents::handle_upload_resume).layer(upload_limit.clone()),
        )
        .route("/api/v1/resumes/:id", get(documents::handle_get_resume))
        .route(
            "/api/v1/job-descriptions",
            post(documents::handle_create_job_description),
        )
        .route(
            "/api/v1/job-descriptions/upload",
            post(documents::handle_upload_job_description).layer(upload_limit),
        )
        .route(
            "/api/v1/job-descriptions/:id",
            get(documents::handle_get_job_description),
        )
        // Match analysis
        .route(
            "/api/v1/match-analysis",
            post(matching::handle_match_analysis),
        )
        .route(
            "/api/v1/match-analysis/preview",
            post(matching::handle_match_preview),
        )
        .with_state(state)
}
