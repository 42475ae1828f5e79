//! Text normalization shared by the summarizer and renderers.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));

// `\w` is Unicode-aware, so Hangul and other scripts survive.
static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?@-]").expect("Invalid regex"));

/// Collapse whitespace runs, drop everything except word characters, spaces and
/// `. , ! ? @ -`, then trim.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text, " ");
    let stripped = DISALLOWED_RE.replace_all(&collapsed, "");
    stripped.trim().to_string()
}

/// First `max` characters of `text` (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
