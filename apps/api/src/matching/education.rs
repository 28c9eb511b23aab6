use serde::{Deserialize, Serialize};

use crate::matching::round_to;

/// Ordinal education level. `Unspecified` means no keyword was recognized.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    Unspecified = 0,
    HighSchool = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    Doctorate = 5,
}

const LEVEL_KEYWORDS: &[(&str, EducationLevel)] = &[
    ("high school", EducationLevel::HighSchool),
    ("diploma", EducationLevel::Associate),
    ("associate", EducationLevel::Associate),
    ("bachelor", EducationLevel::Bachelor),
    ("master", EducationLevel::Master),
    ("phd", EducationLevel::Doctorate),
    ("doctorate", EducationLevel::Doctorate),
];

impl EducationLevel {
    /// Highest level whose keyword appears anywhere in `text`, case-insensitive.
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        LEVEL_KEYWORDS
            .iter()
            .filter(|(keyword, _)| lower.contains(keyword))
            .map(|(_, level)| *level)
            .max()
            .unwrap_or_default()
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Scores candidate education against the requirement, 0-100.
///
/// Unrecognized requirements score 100; equal or higher candidate levels
/// score 100; lower levels score rank ratio × 100.
pub fn education_score(required: &str, candidate: &str) -> f64 {
    let required_level = EducationLevel::detect(required);
    let candidate_level = EducationLevel::detect(candidate);

    if required_level == EducationLevel::Unspecified || candidate_level >= required_level {
        return 100.0;
    }

    round_to(
        f64::from(candidate_level.rank()) / f64::from(required_level.rank()) * 100.0,
        1,
    )
}
