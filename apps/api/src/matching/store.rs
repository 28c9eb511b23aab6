//! Document lookup seam for the scorer, plus match_results persistence.
//!
//! The scorer only needs `get_job` / `get_resume`; `AppState` carries an
//! `Arc<dyn DocumentStore>` so tests can score against in-memory documents.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::extraction::repository;
use crate::models::job::{JobRow, StructuredJob};
use crate::models::matching::{MatchResult, MatchResultRow};
use crate::models::resume::{ResumeRow, StructuredResume};

/// A structured document together with its optional embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument<T> {
    pub id: Uuid,
    pub fields: T,
    pub embedding: Option<Vec<f32>>,
}

impl From<JobRow> for StoredDocument<StructuredJob> {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            fields: row.structured_data.0,
            embedding: row.embedding,
        }
    }
}

impl From<ResumeRow> for StoredDocument<StructuredResume> {
    fn from(row: ResumeRow) -> Self {
        Self {
            id: row.id,
            fields: row.structured_data.0,
            embedding: row.embedding,
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_job(&self, id: Uuid) -> Result<Option<StoredDocument<StructuredJob>>>;

    async fn get_resume(&self, id: Uuid) -> Result<Option<StoredDocument<StructuredResume>>>;
}

/// Postgres-backed store reading the `jobs` and `resumes` tables.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get_job(&self, id: Uuid) -> Result<Option<StoredDocument<StructuredJob>>> {
        Ok(repository::get_job(&self.pool, id).await?.map(Into::into))
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<StoredDocument<StructuredResume>>> {
        Ok(repository::get_resume(&self.pool, id).await?.map(Into::into))
    }
}

/// Persists a freshly computed match. Rows are insert-only.
pub async fn insert_match_result(
    pool: &PgPool,
    job_id: Uuid,
    resume_id: Uuid,
    result: &MatchResult,
    explanation: Option<&str>,
) -> sqlx::Result<MatchResultRow> {
    let row = sqlx::query_as::<_, MatchResultRow>(
        r#"
        INSERT INTO match_results
            (id, job_id, resume_id, match_score, semantic_similarity, result_data, explanation)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job_id)
    .bind(resume_id)
    .bind(result.match_score)
    .bind(result.semantic_similarity)
    .bind(Json(&result.result_data))
    .bind(explanation)
    .fetch_one(pool)
    .await?;

    info!(
        "Stored match {} (job {job_id}, resume {resume_id}, score {})",
        row.id, row.match_score
    );
    Ok(row)
}

pub async fn get_match_result(
    pool: &PgPool,
    match_id: Uuid,
) -> sqlx::Result<Option<MatchResultRow>> {
    Ok(
        sqlx::query_as::<_, MatchResultRow>("SELECT * FROM match_results WHERE id = $1")
            .bind(match_id)
            .fetch_optional(pool)
            .await?,
    )
}
