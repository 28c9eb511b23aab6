use sqlx::types::Json;
use sqlx::{PgPool, Result};
use tracing::info;
use uuid::Uuid;

use crate::models::job::{JobRow, StructuredJob};
use crate::models::resume::{ResumeRow, StructuredResume};

pub async fn insert_job(
    pool: &PgPool,
    raw_text: &str,
    job: &StructuredJob,
    embedding: Option<Vec<f32>>,
) -> Result<JobRow> {
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (id, raw_text, structured_data, embedding)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(raw_text)
    .bind(Json(job))
    .bind(embedding)
    .fetch_one(pool)
    .await?;

    info!("Stored job {}", row.id);
    Ok(row)
}

pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobRow>> {
    Ok(sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?)
}

/// Parameters for storing a parsed resume.
pub struct NewResume<'a> {
    pub id: Uuid,
    pub filename: &'a str,
    pub raw_text: &'a str,
    pub s3_key: Option<&'a str>,
    pub resume: &'a StructuredResume,
    pub embedding: Option<Vec<f32>>,
}

pub async fn insert_resume(pool: &PgPool, new: NewResume<'_>) -> Result<ResumeRow> {
    let NewResume {
        id,
        filename,
        raw_text,
        s3_key,
        resume,
        embedding,
    } = new;

    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, filename, raw_text, s3_key, structured_data, embedding)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(filename)
    .bind(raw_text)
    .bind(s3_key)
    .bind(Json(resume))
    .bind(embedding)
    .fetch_one(pool)
    .await?;

    info!("Stored resume {} ({filename})", row.id);
    Ok(row)
}

pub async fn get_resume(pool: &PgPool, resume_id: Uuid) -> Result<Option<ResumeRow>> {
    Ok(
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(resume_id)
            .fetch_optional(pool)
            .await?,
    )
}
