// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it and composes these in.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Placeholder substituted for empty lists when rendering prompts.
pub const NONE_LISTED: &str = "None";

/// Placeholder substituted for empty scalar fields when rendering prompts.
pub const NOT_AVAILABLE: &str = "N/A";

/// Joins a list for prompt display, falling back to `empty` when it has no entries.
pub fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

/// Returns `value`, or `empty` when it is blank.
pub fn text_or<'a>(value: &'a str, empty: &'a str) -> &'a str {
    if value.trim().is_empty() {
        empty
    } else {
        value
    }
}
