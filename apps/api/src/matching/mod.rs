//! Match scoring engine.
//!
//! Leaves first: `similarity`, `set_matcher`, `experience`, `education`.
//! `scorer` combines them under the `weights` vector; `store` is the
//! document-lookup seam and the match_results persistence.
//! Everything except the store is pure and synchronous.

pub mod education;
pub mod experience;
pub mod handlers;
pub mod scorer;
pub mod set_matcher;
pub mod similarity;
pub mod store;
pub mod weights;

/// Rounds half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
