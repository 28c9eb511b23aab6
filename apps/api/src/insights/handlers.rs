//! Axum route handlers for match insights.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::gap_analysis::{
    analyze_skill_gap, get_latest_gap_analysis, insert_gap_analysis, GapAnalysis,
};
use crate::matching::store::get_match_result;
use crate::models::matching::GapAnalysisRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GapAnalysisResponse {
    pub gap_analysis_id: Uuid,
    pub match_id: Uuid,
    pub gap_analysis: GapAnalysis,
    pub created_at: DateTime<Utc>,
}

impl From<GapAnalysisRow> for GapAnalysisResponse {
    fn from(row: GapAnalysisRow) -> Self {
        Self {
            gap_analysis_id: row.id,
            match_id: row.match_id,
            gap_analysis: row.gap_data.0,
            created_at: row.created_at,
        }
    }
}

/// POST /api/v1/matches/:id/gap-analysis
///
/// Runs a gap analysis for a stored match and stores it as a new record.
/// Returns 429 when the LLM quota is exhausted.
pub async fn handle_create_gap_analysis(
    State(state): State<AppState>,
    Path(match_id): Path<Uuid>,
) -> Result<Json<GapAnalysisResponse>, AppError> {
    let match_row = get_match_result(&state.db, match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {match_id} not found")))?;

    let job = state
        .store
        .get_job(match_row.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", match_row.job_id)))?;
    let resume = state
        .store
        .get_resume(match_row.resume_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Resume {} not found", match_row.resume_id))
        })?;

    let analysis = analyze_skill_gap(
        &job.fields,
        &resume.fields,
        &match_row.result_data,
        &state.llm,
    )
    .await?;

    let row = insert_gap_analysis(&state.db, match_id, &analysis).await?;
    Ok(Json(row.into()))
}

/// GET /api/v1/matches/:id/gap-analysis
pub async fn handle_get_gap_analysis(
    State(state): State<AppState>,
    Path(match_id): Path<Uuid>,
) -> Result<Json<GapAnalysisResponse>, AppError> {
    let row = get_latest_gap_analysis(&state.db, match_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No gap analysis for match {match_id}"))
        })?;
    Ok(Json(row.into()))
}
