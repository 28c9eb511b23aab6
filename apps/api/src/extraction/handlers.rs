//! Axum route handlers for job and resume intake.

use aws_sdk_s3::primitives::ByteStream;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::embedding::embed_or_skip;
use crate::errors::AppError;
use crate::extraction::job_extractor::{extract_job, job_embedding_text};
use crate::extraction::repository::{self, NewResume};
use crate::extraction::resume_parser::{extract_pdf_text, parse_resume, resume_embedding_text};
use crate::models::job::{JobRow, StructuredJob};
use crate::models::resume::{ResumeRow, StructuredResume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job_id: Uuid,
    pub job: StructuredJob,
    pub has_embedding: bool,
    pub created_at: DateTime<Utc>,
}

impl From<JobRow> for JobResponse {
    fn from(row: JobRow) -> Self {
        Self {
            job_id: row.id,
            has_embedding: row.embedding.is_some(),
            job: row.structured_data.0,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume_id: Uuid,
    pub filename: String,
    pub resume: StructuredResume,
    pub s3_key: Option<String>,
    pub has_embedding: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ResumeRow> for ResumeResponse {
    fn from(row: ResumeRow) -> Self {
        Self {
            resume_id: row.id,
            filename: row.filename,
            has_embedding: row.embedding.is_some(),
            resume: row.structured_data.0,
            s3_key: row.s3_key,
            created_at: row.created_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs
///
/// Extracts structured fields from a pasted job description, embeds it and stores it.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<JobResponse>, AppError> {
    let raw_text = request.raw_text.trim();
    if raw_text.is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    let job = extract_job(raw_text, &state.llm).await?;
    let embedding = embed_or_skip(
        state.embedder.as_deref(),
        &job_embedding_text(&job, raw_text),
    )
    .await;

    let row = repository::insert_job(&state.db, raw_text, &job, embedding).await?;
    Ok(Json(row.into()))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobResponse>, AppError> {
    let row = repository::get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(row.into()))
}

/// POST /api/v1/resumes (multipart, field `file`)
///
/// Extracts text from the uploaded PDF, parses it, embeds it, archives the
/// original in S3 and stores the parsed resume.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeResponse>, AppError> {
    let (filename, bytes) = read_file_field(multipart).await?;

    let pdf_bytes = bytes.clone();
    let raw_text = tokio::task::spawn_blocking(move || extract_pdf_text(&pdf_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))??;
    info!("Extracted {} chars from {filename}", raw_text.len());

    let resume = parse_resume(&raw_text, &state.llm).await?;
    let embedding = embed_or_skip(
        state.embedder.as_deref(),
        &resume_embedding_text(&resume, &raw_text),
    )
    .await;

    let resume_id = Uuid::new_v4();
    let s3_key = format!("resumes/{resume_id}/{filename}");
    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&s3_key)
        .body(ByteStream::from(bytes))
        .content_type("application/pdf")
        .send()
        .await
        .map_err(|e| AppError::S3(format!("Resume upload failed: {e}")))?;
    info!("Uploaded resume to s3://{}/{}", state.config.s3_bucket, s3_key);

    let row = repository::insert_resume(
        &state.db,
        NewResume {
            id: resume_id,
            filename: &filename,
            raw_text: &raw_text,
            s3_key: Some(&s3_key),
            resume: &resume,
            embedding,
        },
    )
    .await?;

    Ok(Json(row.into()))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let row = repository::get_resume(&state.db, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
    Ok(Json(row.into()))
}

/// Pulls the `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = sanitize_filename(field.file_name().unwrap_or_default());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok((filename, bytes));
    }
    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}

/// Keeps the last path component and replaces anything outside a safe set.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches(['.', '_']).is_empty() {
        "resume.pdf".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename(r"C:\Users\me\cv.pdf"), "cv.pdf");
    }

    #[test]
    fn test_sanitize_filename_replaces_unsafe_chars() {
        assert_eq!(sanitize_filename("Jane Doe (2024).pdf"), "Jane_Doe__2024_.pdf");
    }

    #[test]
    fn test_sanitize_filename_defaults_when_empty() {
        assert_eq!(sanitize_filename(""), "resume.pdf");
        assert_eq!(sanitize_filename(".."), "resume.pdf");
    }
}
