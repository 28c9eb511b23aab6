pub mod job;
pub mod matching;
pub mod resume;

use crate::matching::set_matcher::normalize;

/// Trims and lowercases every entry, drops blanks and repeated entries while
/// keeping the first-seen order. Applied to extracted skill/tool lists before
/// they are stored.
pub fn normalize_list(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let key = normalize(item);
        if !key.is_empty() && !out.contains(&key) {
            out.push(key);
        }
    }
    out
}
