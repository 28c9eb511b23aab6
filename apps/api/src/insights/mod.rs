// Derived insights over a stored match: candidate-facing explanation and skill-gap analysis.
// Both read a MatchResult and produce new records; neither modifies the match.

pub mod explanation;
pub mod gap_analysis;
pub mod handlers;
pub mod prompts;
