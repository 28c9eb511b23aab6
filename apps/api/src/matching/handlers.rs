//! Axum route handlers for the Match API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::explanation::generate_explanation;
use crate::matching::scorer::calculate_match_score;
use crate::matching::store::{get_match_result, insert_match_result};
use crate::models::matching::{MatchBreakdown, MatchResultRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub job_id: Uuid,
    pub resume_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub job_id: Uuid,
    pub resume_id: Uuid,
    pub match_score: f64,
    pub semantic_similarity: f64,
    pub result_data: MatchBreakdown,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MatchResultRow> for MatchResponse {
    fn from(row: MatchResultRow) -> Self {
        Self {
            match_id: row.id,
            job_id: row.job_id,
            resume_id: row.resume_id,
            match_score: row.match_score,
            semantic_similarity: row.semantic_similarity,
            result_data: row.result_data.0,
            explanation: row.explanation,
            created_at: row.created_at,
        }
    }
}

/// POST /api/v1/matches
///
/// Scores a stored job against a stored resume, attaches a best-effort
/// explanation and persists the result as a new match row.
pub async fn handle_create_match(
    State(state): State<AppState>,
    Json(request): Json<CreateMatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let outcome = calculate_match_score(
        state.store.as_ref(),
        request.job_id,
        request.resume_id,
        &state.config.weights,
    )
    .await?;
    info!(
        "Scored job {} against resume {}: {}",
        request.job_id, request.resume_id, outcome.result.match_score
    );

    let explanation = match generate_explanation(&outcome, &state.llm).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Storing match without explanation: {e}");
            None
        }
    };

    let row = insert_match_result(
        &state.db,
        request.job_id,
        request.resume_id,
        &outcome.result,
        explanation.as_deref(),
    )
    .await?;

    Ok(Json(row.into()))
}

/// GET /api/v1/matches/:id
pub async fn handle_get_match(
    State(state): State<AppState>,
    Path(match_id): Path<Uuid>,
) -> Result<Json<MatchResponse>, AppError> {
    let row = get_match_result(&state.db, match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {match_id} not found")))?;
    Ok(Json(row.into()))
}
