//! Skill-gap analysis: learning recommendations for what a match is missing.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{PgPool, Result};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::prompts::{GAP_ANALYSIS_PROMPT_TEMPLATE, GAP_ANALYSIS_SYSTEM};
use crate::llm_client::prompts::{join_or, text_or, NONE_LISTED, NOT_AVAILABLE};
use crate::llm_client::LlmClient;
use crate::models::job::StructuredJob;
use crate::models::matching::{GapAnalysisRow, MatchBreakdown};
use crate::models::resume::StructuredResume;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseRecommendation {
    pub name: String,
    pub platform: String,
    pub skill_covered: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSuggestion {
    pub title: String,
    pub description: String,
    pub skills_practiced: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapAnalysis {
    pub recommended_courses: Vec<CourseRecommendation>,
    pub project_suggestions: Vec<ProjectSuggestion>,
    /// Highest priority first.
    pub skills_to_add: Vec<String>,
}

/// Asks the LLM for courses, projects and a prioritized skill list covering
/// the breakdown's missing skills and tools.
pub async fn analyze_skill_gap(
    job: &StructuredJob,
    resume: &StructuredResume,
    breakdown: &MatchBreakdown,
    llm: &LlmClient,
) -> Result<GapAnalysis, AppError> {
    let prompt = render_gap_prompt(job, resume, breakdown);
    let analysis = llm
        .call_json::<GapAnalysis>(&prompt, GAP_ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::from_llm("Gap analysis failed", e))?;

    info!(
        "Gap analysis: {} courses, {} projects, {} skills to add",
        analysis.recommended_courses.len(),
        analysis.project_suggestions.len(),
        analysis.skills_to_add.len()
    );
    Ok(analysis)
}

fn render_gap_prompt(
    job: &StructuredJob,
    resume: &StructuredResume,
    breakdown: &MatchBreakdown,
) -> String {
    GAP_ANALYSIS_PROMPT_TEMPLATE
        .replace(
            "{missing_skills}",
            &join_or(&breakdown.missing_skills, NONE_LISTED),
        )
        .replace(
            "{missing_tools}",
            &join_or(&breakdown.missing_tools, NONE_LISTED),
        )
        .replace("{job_title}", text_or(&job.title, NOT_AVAILABLE))
        .replace("{required_skills}", &job.required_skills.join(", "))
        .replace("{required_tools}", &job.required_tools.join(", "))
        .replace("{candidate_skills}", &resume.skills.join(", "))
        .replace("{candidate_tools}", &resume.tools.join(", "))
        .replace(
            "{experience}",
            text_or(&resume.experience_years, NOT_AVAILABLE),
        )
        .replace("{education}", text_or(&resume.education, NOT_AVAILABLE))
}

/// Stores a gap analysis as a new row referencing its match.
pub async fn insert_gap_analysis(
    pool: &PgPool,
    match_id: Uuid,
    analysis: &GapAnalysis,
) -> Result<GapAnalysisRow> {
    let row = sqlx::query_as::<_, GapAnalysisRow>(
        r#"
        INSERT INTO gap_analyses (id, match_id, gap_data)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(Json(analysis))
    .fetch_one(pool)
    .await?;

    info!("Stored gap analysis {} for match {match_id}", row.id);
    Ok(row)
}

/// Most recent gap analysis for a match.
pub async fn get_latest_gap_analysis(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Option<GapAnalysisRow>> {
    Ok(sqlx::query_as::<_, GapAnalysisRow>(
        "SELECT * FROM gap_analyses WHERE match_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(match_id)
    .fetch_optional(pool)
    .await?)
}
