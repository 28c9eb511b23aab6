use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::normalize_list;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Structured fields parsed out of a candidate resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredResume {
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    /// Free text such as "3", "5+" or "1-2".
    pub experience_years: String,
    /// Highest degree and field, free text.
    pub education: String,
    pub certifications: Vec<String>,
    pub projects: Vec<Project>,
}

impl StructuredResume {
    pub fn normalized(self) -> Self {
        Self {
            skills: normalize_list(&self.skills),
            tools: normalize_list(&self.tools),
            experience_years: self.experience_years.trim().to_string(),
            education: self.education.trim().to_string(),
            certifications: self
                .certifications
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
            projects: self
                .projects
                .into_iter()
                .map(|p| Project {
                    technologies: normalize_list(&p.technologies),
                    ..p
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    pub raw_text: String,
    /// Object key of the uploaded original in the resume bucket.
    pub s3_key: Option<String>,
    pub structured_data: Json<StructuredResume>,
    pub embedding: Option<Vec<f32>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_resume_defaults_missing_fields() {
        let json = r#"{"skills": ["Rust"], "experience_years": "5+"}"#;
        let resume: StructuredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.skills, vec!["Rust"]);
        assert_eq!(resume.experience_years, "5+");
        assert!(resume.tools.is_empty());
        assert!(resume.projects.is_empty());
    }

    #[test]
    fn test_normalized_resume_cleans_projects_and_certifications() {
        let resume = StructuredResume {
            skills: vec!["Docker".to_string()],
            certifications: vec!["  AWS SAA ".to_string(), "".to_string()],
            projects: vec![Project {
                title: "Search".to_string(),
                description: "Full-text search service".to_string(),
                technologies: vec!["Rust".to_string(), " rust ".to_string()],
            }],
            ..Default::default()
        }
        .normalized();

        assert_eq!(resume.skills, vec!["docker"]);
        assert_eq!(resume.certifications, vec!["AWS SAA"]);
        assert_eq!(resume.projects[0].technologies, vec!["rust"]);
        assert_eq!(resume.projects[0].title, "Search");
    }
}
