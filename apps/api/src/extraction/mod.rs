// Document intake: job descriptions and resumes.
// Implements: LLM field extraction, PDF text extraction, embedding text, persistence.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod handlers;
pub mod job_extractor;
pub mod prompts;
pub mod repository;
pub mod resume_parser;

/// Raw text appended to the embedding input.
const EMBED_RAW_TEXT_CHARS: usize = 500;
/// Raw text used on its own when no structured field is populated.
const EMBED_FALLBACK_CHARS: usize = 1000;

/// Returns at most `max_chars` characters of `text`, cut on a char boundary.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Joins the populated structured parts with " | " and appends a raw-text
/// prefix. Falls back to the raw text alone when no part is populated.
pub(crate) fn compose_embedding_text(parts: Vec<String>, raw_text: &str) -> String {
    let mut parts: Vec<String> = parts.into_iter().filter(|p| !p.trim().is_empty()).collect();
    if parts.is_empty() {
        return truncate_chars(raw_text, EMBED_FALLBACK_CHARS).to_string();
    }
    if !raw_text.trim().is_empty() {
        parts.push(truncate_chars(raw_text, EMBED_RAW_TEXT_CHARS).to_string());
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_compose_skips_empty_parts() {
        let text = compose_embedding_text(
            vec!["Data Engineer".to_string(), String::new(), "python sql".to_string()],
            "raw",
        );
        assert_eq!(text, "Data Engineer | python sql | raw");
    }

    #[test]
    fn test_compose_falls_back_to_raw_text() {
        let raw = "x".repeat(1500);
        let text = compose_embedding_text(vec![String::new()], &raw);
        assert_eq!(text.len(), 1000);
    }

    #[test]
    fn test_compose_truncates_raw_suffix() {
        let raw = "y".repeat(800);
        let text = compose_embedding_text(vec!["rust".to_string()], &raw);
        assert_eq!(text.len(), "rust | ".len() + 500);
    }
}
