//! Score Aggregator: combines the component scores into one 0-100 match score.
//!
//! Algorithm:
//! 1. semantic similarity = cosine(job embedding, resume embedding), or 0.0
//!    when either embedding is absent
//! 2. skill and tool coverage via the set matcher (two independent runs)
//! 3. experience and education heuristics on their text pairs
//! 4. final = Σ(weight × component), semantic contributing as similarity × 100,
//!    capped at 100.0 and rounded to one decimal

use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::education::education_score;
use crate::matching::experience::experience_score;
use crate::matching::round_to;
use crate::matching::set_matcher::match_sets;
use crate::matching::similarity::cosine_similarity;
use crate::matching::store::{DocumentStore, StoredDocument};
use crate::matching::weights::ScoringWeights;
use crate::models::job::StructuredJob;
use crate::models::matching::{MatchBreakdown, MatchResult};
use crate::models::resume::StructuredResume;

/// A scored pair together with the documents it was computed from.
/// Downstream stages (explanation, gap analysis) read the documents without
/// fetching them again.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub job: StoredDocument<StructuredJob>,
    pub resume: StoredDocument<StructuredResume>,
    pub result: MatchResult,
}

/// Resolves both documents and scores them.
///
/// Fails fast with `NotFound` if either id does not resolve; a missing record
/// is never retried.
pub async fn calculate_match_score(
    store: &dyn DocumentStore,
    job_id: Uuid,
    resume_id: Uuid,
    weights: &ScoringWeights,
) -> Result<MatchOutcome, AppError> {
    let job = store
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    let resume = store
        .get_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let result = score_documents(&job, &resume, weights);

    Ok(MatchOutcome {
        job,
        resume,
        result,
    })
}

/// Pure scoring of one (job, resume) pair. Deterministic for identical inputs.
pub fn score_documents(
    job: &StoredDocument<StructuredJob>,
    resume: &StoredDocument<StructuredResume>,
    weights: &ScoringWeights,
) -> MatchResult {
    let similarity = match (&job.embedding, &resume.embedding) {
        (Some(job_vec), Some(resume_vec)) => cosine_similarity(job_vec, resume_vec),
        _ => 0.0,
    };

    let skills = match_sets(&job.fields.required_skills, &resume.fields.skills);
    let tools = match_sets(&job.fields.required_tools, &resume.fields.tools);
    let experience = experience_score(
        &job.fields.experience_required,
        &resume.fields.experience_years,
    );
    let education = education_score(&job.fields.education_required, &resume.fields.education);

    debug!(
        job_id = %job.id,
        resume_id = %resume.id,
        similarity,
        skill_pct = skills.match_percentage,
        tools_pct = tools.match_percentage,
        experience,
        education,
        "component scores"
    );

    let weighted = weights.semantic() * (similarity * 100.0)
        + weights.skill() * skills.match_percentage
        + weights.experience() * experience
        + weights.education() * education
        + weights.tools() * tools.match_percentage;

    MatchResult {
        match_score: round_to(weighted.min(100.0), 1),
        semantic_similarity: round_to(similarity, 4),
        result_data: MatchBreakdown {
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            skill_match_pct: skills.match_percentage,
            experience_score: experience,
            education_score: education,
            matched_tools: tools.matched,
            missing_tools: tools.missing,
            tools_match_pct: tools.match_percentage,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::store::memory::MemoryStore;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_job(skills: &[&str], tools: &[&str], experience: &str, education: &str) -> StructuredJob {
        StructuredJob {
            title: "Backend Engineer".to_string(),
            required_skills: strings(skills),
            required_tools: strings(tools),
            experience_required: experience.to_string(),
            education_required: education.to_string(),
            ..Default::default()
        }
    }

    fn make_resume(
        skills: &[&str],
        tools: &[&str],
        experience: &str,
        education: &str,
    ) -> StructuredResume {
        StructuredResume {
            skills: strings(skills),
            tools: strings(tools),
            experience_years: experience.to_string(),
            education: education.to_string(),
            ..Default::default()
        }
    }

    fn doc<T>(fields: T, embedding: Option<Vec<f32>>) -> StoredDocument<T> {
        StoredDocument {
            id: Uuid::new_v4(),
            fields,
            embedding,
        }
    }

    /// Two unit vectors with cosine exactly 0.75.
    fn embeddings_with_similarity_075() -> (Vec<f32>, Vec<f32>) {
        let job = vec![1.0_f32, 0.0];
        let resume = vec![0.75_f32, (1.0_f32 - 0.75 * 0.75).sqrt()];
        (job, resume)
    }

    #[test]
    fn test_end_to_end_scenario_scores_90() {
        let (job_vec, resume_vec) = embeddings_with_similarity_075();
        let job = doc(
            make_job(&["python", "sql"], &["git"], "3-5 years", "bachelor"),
            Some(job_vec),
        );
        let resume = doc(
            make_resume(&["python", "sql", "docker"], &["git"], "4", "master"),
            Some(resume_vec),
        );

        let result = score_documents(&job, &resume, &ScoringWeights::default());

        assert!((result.semantic_similarity - 0.75).abs() < 1e-4);
        assert_eq!(result.result_data.skill_match_pct, 100.0);
        assert_eq!(result.result_data.tools_match_pct, 100.0);
        assert_eq!(result.result_data.experience_score, 100.0);
        assert_eq!(result.result_data.education_score, 100.0);
        assert_eq!(result.result_data.matched_skills, vec!["python", "sql"]);
        assert!(result.result_data.missing_skills.is_empty());
        assert_eq!(result.match_score, 90.0);
    }

    #[test]
    fn test_missing_embedding_scores_zero_similarity() {
        let job = doc(make_job(&["rust"], &[], "", ""), Some(vec![1.0, 0.0]));
        let resume = doc(make_resume(&["rust"], &[], "", ""), None);

        let result = score_documents(&job, &resume, &ScoringWeights::default());

        assert_eq!(result.semantic_similarity, 0.0);
        // Every other component is 100: 0.30 + 0.15 + 0.10 + 0.05 = 60.
        assert_eq!(result.match_score, 60.0);
    }

    #[test]
    fn test_perfect_match_caps_at_100() {
        let v = vec![0.3_f32, 0.4, 0.5];
        let job = doc(make_job(&["rust"], &["cargo"], "2", "bachelor"), Some(v.clone()));
        let resume = doc(
            make_resume(&["Rust"], &["Cargo"], "10 years", "PhD"),
            Some(v),
        );

        let result = score_documents(&job, &resume, &ScoringWeights::default());

        assert_eq!(result.semantic_similarity, 1.0);
        assert_eq!(result.match_score, 100.0);
    }

    #[test]
    fn test_partial_match_breakdown() {
        let job = doc(
            make_job(&["python", "sql", "spark", "kafka"], &["git", "airflow"], "5 years", "Master's degree"),
            None,
        );
        let resume = doc(
            make_resume(&["Python", "SQL"], &["git"], "2 years", "Bachelor's degree"),
            None,
        );

        let result = score_documents(&job, &resume, &ScoringWeights::default());
        let data = &result.result_data;

        assert_eq!(data.matched_skills, vec!["python", "sql"]);
        assert_eq!(data.missing_skills, vec!["kafka", "spark"]);
        assert_eq!(data.skill_match_pct, 50.0);
        assert_eq!(data.matched_tools, vec!["git"]);
        assert_eq!(data.missing_tools, vec!["airflow"]);
        assert_eq!(data.tools_match_pct, 50.0);
        assert_eq!(data.experience_score, 40.0);
        assert_eq!(data.education_score, 75.0);
        // 0 + 0.30×50 + 0.15×40 + 0.10×75 + 0.05×50 = 15 + 6 + 7.5 + 2.5
        assert_eq!(result.match_score, 31.0);
    }

    #[test]
    fn test_custom_weights_are_applied() {
        let weights = ScoringWeights::new(0.0, 1.0, 0.0, 0.0, 0.0).unwrap();
        let job = doc(make_job(&["a", "b", "c", "d"], &[], "", ""), None);
        let resume = doc(make_resume(&["a"], &[], "", ""), None);

        let result = score_documents(&job, &resume, &weights);
        assert_eq!(result.match_score, 25.0);
    }

    #[test]
    fn test_scoring_is_byte_identical_across_calls() {
        let (job_vec, resume_vec) = embeddings_with_similarity_075();
        let job = doc(
            make_job(&["go", "rust", "sql"], &["k8s"], "3-5", "bachelor"),
            Some(job_vec),
        );
        let resume = doc(
            make_resume(&["rust", "sql"], &["docker"], "2", "associate"),
            Some(resume_vec),
        );
        let weights = ScoringWeights::default();

        let first = serde_json::to_string(&score_documents(&job, &resume, &weights)).unwrap();
        let second = serde_json::to_string(&score_documents(&job, &resume, &weights)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_expected_field_set() {
        let job = doc(make_job(&["rust"], &["git"], "1", "bachelor"), None);
        let resume = doc(make_resume(&["rust"], &[], "1", "bachelor"), None);

        let value = serde_json::to_value(score_documents(&job, &resume, &ScoringWeights::default()))
            .unwrap();

        assert!(value["match_score"].is_number());
        assert!(value["semantic_similarity"].is_number());
        let data = value["result_data"].as_object().unwrap();
        let mut keys: Vec<&str> = data.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "education_score",
                "experience_score",
                "matched_skills",
                "matched_tools",
                "missing_skills",
                "missing_tools",
                "skill_match_pct",
                "tools_match_pct",
            ]
        );
    }

    #[tokio::test]
    async fn test_calculate_resolves_documents_from_store() {
        let mut store = MemoryStore::default();
        let job_id = store.add_job(make_job(&["rust"], &[], "", ""), None);
        let resume_id = store.add_resume(make_resume(&["rust"], &[], "", ""), None);

        let outcome = calculate_match_score(&store, job_id, resume_id, &ScoringWeights::default())
            .await
            .unwrap();

        assert_eq!(outcome.job.id, job_id);
        assert_eq!(outcome.resume.id, resume_id);
        assert_eq!(outcome.result.match_score, 60.0);
    }

    #[tokio::test]
    async fn test_calculate_is_deterministic_for_stored_documents() {
        let (job_vec, resume_vec) = embeddings_with_similarity_075();
        let mut store = MemoryStore::default();
        let job_id = store.add_job(make_job(&["python"], &["git"], "3", "master"), Some(job_vec));
        let resume_id = store.add_resume(
            make_resume(&["python"], &[], "1", "bachelor"),
            Some(resume_vec),
        );
        let weights = ScoringWeights::default();

        let a = calculate_match_score(&store, job_id, resume_id, &weights).await.unwrap();
        let b = calculate_match_score(&store, job_id, resume_id, &weights).await.unwrap();
        assert_eq!(
            serde_json::to_vec(&a.result).unwrap(),
            serde_json::to_vec(&b.result).unwrap()
        );
    }

    #[tokio::test]
    async fn test_calculate_missing_job_is_not_found() {
        let mut store = MemoryStore::default();
        let resume_id = store.add_resume(StructuredResume::default(), None);

        let err = calculate_match_score(&store, Uuid::new_v4(), resume_id, &ScoringWeights::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.starts_with("Job")));
    }

    #[tokio::test]
    async fn test_calculate_missing_resume_is_not_found() {
        let mut store = MemoryStore::default();
        let job_id = store.add_job(StructuredJob::default(), None);

        let err = calculate_match_score(&store, job_id, Uuid::new_v4(), &ScoringWeights::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.starts_with("Resume")));
    }
}
