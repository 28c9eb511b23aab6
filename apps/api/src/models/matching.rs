use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::insights::gap_analysis::GapAnalysis;

/// Per-component breakdown stored alongside every match score.
/// All percentages are in [0, 100] with one decimal; name lists are sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_match_pct: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub matched_tools: Vec<String>,
    pub missing_tools: Vec<String>,
    pub tools_match_pct: f64,
}

/// Output of the scoring engine for one (job, resume) pair.
/// Created once and never mutated; later stages reference it by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0-100, one decimal.
    pub match_score: f64,
    /// 0-1, four decimals.
    pub semantic_similarity: f64,
    pub result_data: MatchBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchResultRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub resume_id: Uuid,
    pub match_score: f64,
    pub semantic_similarity: f64,
    pub result_data: Json<MatchBreakdown>,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GapAnalysisRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub gap_data: Json<GapAnalysis>,
    pub created_at: DateTime<Utc>,
}
