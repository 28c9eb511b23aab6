// Prompt constants for job and resume extraction.
// Reuses cross-cutting fragments from llm_client::prompts.

pub use crate::llm_client::prompts::JSON_ONLY_SYSTEM as EXTRACTION_SYSTEM;

/// Job extraction prompt. Replace `{job_text}` before sending.
pub const JOB_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract structured information from the following job description.
Return ONLY a valid JSON object with these exact keys:
- "job_title": string
- "company_name": string
- "location": string
- "experience_required": string (e.g. "3-5 years")
- "skills_required": list of strings
- "education_required": string
- "tools_required": list of strings
- "soft_skills": list of strings
- "job_type": string (e.g. "Full-time", "Remote", "Hybrid")
- "salary": string or null

If a field is not found in the text, use an empty string or empty list as appropriate.
Normalize all skill and tool names to lowercase.

Job Description:
{job_text}
"#;

/// Resume parsing prompt. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Extract structured information from the following resume text.
Return ONLY a valid JSON object with these exact keys:
- "skills": list of strings (technical skills)
- "projects": list of objects, each with "title", "description", "technologies" keys
- "experience_years": string (e.g. "3", "5+", "1-2")
- "education": string (highest degree and field)
- "certifications": list of strings
- "tools": list of strings (software tools, frameworks, platforms)

Normalize all skill and tool names to lowercase.
If a field is not found, use an empty string or empty list.

Resume Text:
{resume_text}
"#;
