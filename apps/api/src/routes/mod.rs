pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as intake;
use crate::insights::handlers as insights;
use crate::matching::handlers as matches;
use crate::state::AppState;

/// Resume uploads are PDFs; allow more than axum's 2 MB default.
const RESUME_UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake
        .route("/api/v1/jobs", post(intake::handle_create_job))
        .route("/api/v1/jobs/:id", get(intake::handle_get_job))
        .route(
            "/api/v1/resumes",
            post(intake::handle_upload_resume)
                .layer(DefaultBodyLimit::max(RESUME_UPLOAD_LIMIT_BYTES)),
        )
        .route("/api/v1/resumes/:id", get(intake::handle_get_resume))
        // Matching
        .route("/api/v1/matches", post(matches::handle_create_match))
        .route("/api/v1/matches/:id", get(matches::handle_get_match))
        // Insights
        .route(
            "/api/v1/matches/:id/gap-analysis",
            post(insights::handle_create_gap_analysis).get(insights::handle_get_gap_analysis),
        )
        .with_state(state)
}
