//! Candidate-facing explanation of a match score.

use crate::errors::AppError;
use crate::insights::prompts::{EXPLANATION_PROMPT_TEMPLATE, EXPLANATION_SYSTEM};
use crate::llm_client::prompts::{join_or, text_or, NONE_LISTED, NOT_AVAILABLE};
use crate::llm_client::LlmClient;
use crate::matching::scorer::MatchOutcome;

/// Generates a 2-3 paragraph explanation for a freshly scored match.
pub async fn generate_explanation(
    outcome: &MatchOutcome,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = render_explanation_prompt(outcome);
    llm.call_text(&prompt, EXPLANATION_SYSTEM)
        .await
        .map_err(|e| AppError::from_llm("Explanation generation failed", e))
}

fn render_explanation_prompt(outcome: &MatchOutcome) -> String {
    let result = &outcome.result;
    let data = &result.result_data;
    let job = &outcome.job.fields;
    let resume = &outcome.resume.fields;

    EXPLANATION_PROMPT_TEMPLATE
        .replace("{match_score}", &result.match_score.to_string())
        .replace(
            "{semantic_similarity}",
            &result.semantic_similarity.to_string(),
        )
        .replace("{matched_skills}", &join_or(&data.matched_skills, NONE_LISTED))
        .replace("{missing_skills}", &join_or(&data.missing_skills, NONE_LISTED))
        .replace("{experience_score}", &data.experience_score.to_string())
        .replace("{education_score}", &data.education_score.to_string())
        .replace("{matched_tools}", &join_or(&data.matched_tools, NONE_LISTED))
        .replace("{missing_tools}", &join_or(&data.missing_tools, NONE_LISTED))
        .replace("{job_title}", text_or(&job.title, NOT_AVAILABLE))
        .replace(
            "{required_skills}",
            &join_or(&job.required_skills, NOT_AVAILABLE),
        )
        .replace("{candidate_skills}", &join_or(&resume.skills, NOT_AVAILABLE))
        .replace(
            "{candidate_education}",
            text_or(&resume.education, NOT_AVAILABLE),
        )
        .replace(
            "{candidate_experience}",
            text_or(&resume.experience_years, NOT_AVAILABLE),
        )
}
