use serde::{Deserialize, Serialize};
use thiserror::Error;

const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{name}' must be a finite value in [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("scoring weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

/// Weight vector for the five score components.
///
/// Only constructible through `new` or `Default`, so a live value always
/// sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    semantic: f64,
    skill: f64,
    experience: f64,
    education: f64,
    tools: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            semantic: 0.40,
            skill: 0.30,
            experience: 0.15,
            education: 0.10,
            tools: 0.05,
        }
    }
}

impl ScoringWeights {
    pub fn new(
        semantic: f64,
        skill: f64,
        experience: f64,
        education: f64,
        tools: f64,
    ) -> Result<Self, WeightsError> {
        let weights = Self {
            semantic,
            skill,
            experience,
            education,
            tools,
        };

        for (name, value) in weights.named() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WeightsError::OutOfRange { name, value });
            }
        }

        let sum = weights.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }

        Ok(weights)
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("semantic", self.semantic),
            ("skill", self.skill),
            ("experience", self.experience),
            ("education", self.education),
            ("tools", self.tools),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.semantic + self.skill + self.experience + self.education + self.tools
    }

    pub fn semantic(&self) -> f64 {
        self.semantic
    }

    pub fn skill(&self) -> f64 {
        self.skill
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn education(&self) -> f64 {
        self.education
    }

    pub fn tools(&self) -> f64 {
        self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        assert!((w.sum() - 1.0).abs() < SUM_TOLERANCE);
        assert_eq!(w.semantic(), 0.40);
        assert_eq!(w.tools(), 0.05);
    }

    #[test]
    fn test_new_accepts_valid_vector() {
        let w = ScoringWeights::new(0.5, 0.2, 0.1, 0.1, 0.1).unwrap();
        assert_eq!(w.skill(), 0.2);
    }

    #[test]
    fn test_new_rejects_bad_sum() {
        let err = ScoringWeights::new(0.5, 0.3, 0.15, 0.10, 0.05).unwrap_err();
        assert!(matches!(err, WeightsError::BadSum(s) if (s - 1.1).abs() < 1e-9));
    }

    #[test]
    fn test_new_rejects_negative_weight() {
        let err = ScoringWeights::new(1.1, -0.1, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, WeightsError::OutOfRange { name: "semantic", .. }));
    }

    #[test]
    fn test_new_rejects_nan() {
        let err = ScoringWeights::new(f64::NAN, 0.3, 0.15, 0.10, 0.05).unwrap_err();
        assert!(matches!(err, WeightsError::OutOfRange { name: "semantic", .. }));
    }
}
