use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::round_to;

/// Result of comparing a required set of names against a candidate set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetMatch {
    /// required ∩ candidate, ascending.
    pub matched: Vec<String>,
    /// required − candidate, ascending.
    pub missing: Vec<String>,
    /// |matched| / |required| × 100, one decimal. 100.0 when nothing is required.
    pub match_percentage: f64,
}

/// Comparison key for a skill or tool name.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn key_set<S: AsRef<str>>(items: &[S]) -> BTreeSet<String> {
    items
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Case- and whitespace-insensitive set comparison.
///
/// Duplicates collapse and input order is discarded. An empty requirement
/// set is trivially satisfied and never penalizes the candidate.
pub fn match_sets<R: AsRef<str>, C: AsRef<str>>(required: &[R], candidate: &[C]) -> SetMatch {
    let required = key_set(required);
    let candidate = key_set(candidate);

    let matched: Vec<String> = required.intersection(&candidate).cloned().collect();
    let missing: Vec<String> = required.difference(&candidate).cloned().collect();

    let match_percentage = if required.is_empty() {
        100.0
    } else {
        round_to(matched.len() as f64 / required.len() as f64 * 100.0, 1)
    };

    SetMatch {
        matched,
        missing,
        match_percentage,
    }
}
