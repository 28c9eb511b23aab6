// Prompt constants for explanation and gap analysis.

pub use crate::llm_client::prompts::JSON_ONLY_SYSTEM as GAP_ANALYSIS_SYSTEM;

pub const EXPLANATION_SYSTEM: &str = "You are an expert career advisor. \
    Write plain prose for a job candidate. \
    Do not use markdown formatting.";

/// Explanation prompt. Every `{placeholder}` is substituted before sending.
pub const EXPLANATION_PROMPT_TEMPLATE: &str = r#"Given the following job-resume match analysis, write a clear, helpful explanation for the candidate.

Match Score: {match_score}/100
Semantic Similarity: {semantic_similarity}
Matched Skills: {matched_skills}
Missing Skills: {missing_skills}
Experience Score: {experience_score}/100
Education Score: {education_score}/100
Tools Matched: {matched_tools}
Tools Missing: {missing_tools}

Job Title: {job_title}
Required Skills: {required_skills}

Candidate Skills: {candidate_skills}
Candidate Education: {candidate_education}
Candidate Experience: {candidate_experience}

Write 2-3 short paragraphs covering:
1. Overall fit assessment
2. Key strengths the candidate brings
3. Main gaps and what to improve

Be specific and actionable.
"#;

/// Gap analysis prompt. Every `{placeholder}` is substituted before sending.
pub const GAP_ANALYSIS_PROMPT_TEMPLATE: &str = r#"A candidate is applying for a job but has skill gaps.
Analyze the gaps and provide actionable recommendations.

Missing Skills: {missing_skills}
Missing Tools: {missing_tools}

Job Details:
- Title: {job_title}
- Required Skills: {required_skills}
- Required Tools: {required_tools}

Candidate Profile:
- Current Skills: {candidate_skills}
- Current Tools: {candidate_tools}
- Experience: {experience}
- Education: {education}

Return a JSON object with these keys:
- "recommended_courses": list of objects with "name", "platform", "skill_covered" keys
- "project_suggestions": list of objects with "title", "description", "skills_practiced" keys ("skills_practiced" is a list of strings)
- "skills_to_add": list of strings (prioritized skills the candidate should learn first)

Provide at least 3 courses and 2 project suggestions. Prioritize skills by relevance to the job.
"#;
