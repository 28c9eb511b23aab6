//! Job extractor: turns a raw job description into a `StructuredJob`.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::compose_embedding_text;
use crate::extraction::prompts::{EXTRACTION_SYSTEM, JOB_EXTRACTION_PROMPT_TEMPLATE};
use crate::llm_client::LlmClient;
use crate::models::job::StructuredJob;

/// Extracts structured job fields via the LLM and normalizes them.
pub async fn extract_job(raw_text: &str, llm: &LlmClient) -> Result<StructuredJob, AppError> {
    let prompt = JOB_EXTRACTION_PROMPT_TEMPLATE.replace("{job_text}", raw_text);
    let job = llm
        .call_json::<StructuredJob>(&prompt, EXTRACTION_SYSTEM)
        .await
        .map_err(|e| AppError::from_llm("Job extraction failed", e))?
        .normalized();

    info!(
        "Job extracted: title={:?}, {} skills, {} tools",
        job.title,
        job.required_skills.len(),
        job.required_tools.len()
    );
    Ok(job)
}

/// Text fed to the embedder for a job: title, skills, tools, education, raw prefix.
pub fn job_embedding_text(job: &StructuredJob, raw_text: &str) -> String {
    compose_embedding_text(
        vec![
            job.title.clone(),
            job.required_skills.join(" "),
            job.required_tools.join(" "),
            job.education_required.clone(),
        ],
        raw_text,
    )
}
