//! Resume parser: PDF text extraction and structured field parsing.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::compose_embedding_text;
use crate::extraction::prompts::{EXTRACTION_SYSTEM, RESUME_PARSE_PROMPT_TEMPLATE};
use crate::llm_client::LlmClient;
use crate::models::resume::StructuredResume;

/// Extracts plain text from PDF bytes. CPU-bound; call from a blocking task.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text.to_string())
}

/// Parses resume text into structured fields via the LLM.
pub async fn parse_resume(raw_text: &str, llm: &LlmClient) -> Result<StructuredResume, AppError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", raw_text);
    let resume = llm
        .call_json::<StructuredResume>(&prompt, EXTRACTION_SYSTEM)
        .await
        .map_err(|e| AppError::from_llm("Resume parsing failed", e))?
        .normalized();

    info!(
        "Resume parsed: {} skills, {} tools, {} projects",
        resume.skills.len(),
        resume.tools.len(),
        resume.projects.len()
    );
    Ok(resume)
}

/// Text fed to the embedder for a resume: skills, tools, education, certifications, raw prefix.
pub fn resume_embedding_text(resume: &StructuredResume, raw_text: &str) -> String {
    compose_embedding_text(
        vec![
            resume.skills.join(" "),
            resume.tools.join(" "),
            resume.education.clone(),
            resume.certifications.join(" "),
        ],
        raw_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_bytes_are_unprocessable() {
        let err = extract_pdf_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_llm_payload_with_projects_deserializes() {
        let payload = r#"{
            "skills": ["Rust", "SQL"],
            "projects": [
                {"title": "Indexer", "description": "Inverted index", "technologies": ["Rust", "Tokio"]}
            ],
            "experience_years": "4",
            "education": "B.Sc. Computer Science (Bachelor)",
            "certifications": [],
            "tools": ["Git"]
        }"#;
        let resume: StructuredResume = serde_json::from_str(payload).unwrap();
        let resume = resume.normalized();
        assert_eq!(resume.skills, vec!["rust", "sql"]);
        assert_eq!(resume.projects[0].technologies, vec!["rust", "tokio"]);
        assert_eq!(resume.tools, vec!["git"]);
    }

    #[test]
    fn test_embedding_text_skips_empty_fields() {
        let resume = StructuredResume {
            skills: vec!["rust".to_string()],
            education: "Master's".to_string(),
            ..Default::default()
        };
        assert_eq!(resume_embedding_text(&resume, ""), "rust | Master's");
    }
}
