use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::normalize_list;

/// Structured fields extracted from a free-form job description.
///
/// Missing fields deserialize to their defaults: extraction output is
/// free-form and an absent field is an expected case, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredJob {
    #[serde(alias = "job_title")]
    pub title: String,
    #[serde(alias = "company_name")]
    pub company: String,
    pub location: String,
    /// Free text such as "3-5 years" or "5+".
    pub experience_required: String,
    pub education_required: String,
    #[serde(alias = "skills_required")]
    pub required_skills: Vec<String>,
    #[serde(alias = "tools_required")]
    pub required_tools: Vec<String>,
    pub soft_skills: Vec<String>,
    pub job_type: String,
    pub salary: Option<String>,
}

impl StructuredJob {
    /// Boundary validation: trims scalar fields and normalizes the skill,
    /// tool and soft-skill lists.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            experience_required: self.experience_required.trim().to_string(),
            education_required: self.education_required.trim().to_string(),
            required_skills: normalize_list(&self.required_skills),
            required_tools: normalize_list(&self.required_tools),
            soft_skills: normalize_list(&self.soft_skills),
            job_type: self.job_type.trim().to_string(),
            salary: self
                .salary
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub raw_text: String,
    pub structured_data: Json<StructuredJob>,
    pub embedding: Option<Vec<f32>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_job_accepts_extractor_field_names() {
        let json = r#"{
            "job_title": "Backend Engineer",
            "company_name": "Acme",
            "experience_required": "3-5 years",
            "skills_required": ["Python", "SQL"],
            "tools_required": ["Git"],
            "salary": null
        }"#;
        let job: StructuredJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.required_skills, vec!["Python", "SQL"]);
        assert_eq!(job.required_tools, vec!["Git"]);
        assert!(job.location.is_empty());
        assert!(job.salary.is_none());
    }

    #[test]
    fn test_normalized_lowercases_lists_and_drops_blank_salary() {
        let job = StructuredJob {
            title: "  Data Engineer ".to_string(),
            required_skills: vec!["Python ".to_string(), "python".to_string()],
            required_tools: vec![" Airflow".to_string()],
            salary: Some("  ".to_string()),
            ..Default::default()
        }
        .normalized();

        assert_eq!(job.title, "Data Engineer");
        assert_eq!(job.required_skills, vec!["python"]);
        assert_eq!(job.required_tools, vec!["airflow"]);
        assert!(job.salary.is_none());
    }
}
