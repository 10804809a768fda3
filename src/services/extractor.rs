//! Recovers movie suggestions from free-form model output.
//!
//! Model text usually contains the JSON array we asked for, but it may be
//! wrapped in prose or markdown fences, or come back as a single object. Each
//! extraction strategy is a pure function locating one candidate span; they
//! are tried in [`STRATEGIES`] order and the first one whose span parses into
//! at least one valid suggestion wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::Suggestion;

/// Upper bound on suggestions returned; the prompt asks for 3 to 5
pub const MAX_SUGGESTIONS: usize = 5;

static RE_LAZY_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*?\]").expect("valid regex"));
static RE_GREEDY_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));
static RE_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*?\}").expect("valid regex"));

/// Locates a candidate JSON array in the text
pub type Strategy = fn(&str) -> Option<String>;

/// Extraction strategies in the order they are attempted
pub const STRATEGIES: [(&str, Strategy); 3] = [
    ("lazy_array", lazy_array),
    ("greedy_array", greedy_array),
    ("single_object", single_object),
];

/// Shortest span from the first `[` to the next `]`
pub fn lazy_array(text: &str) -> Option<String> {
    RE_LAZY_ARRAY.find(text).map(|m| m.as_str().to_string())
}

/// Longest span from the first `[` to the last `]`, tolerating nested brackets
pub fn greedy_array(text: &str) -> Option<String> {
    RE_GREEDY_ARRAY.find(text).map(|m| m.as_str().to_string())
}

/// First `{...}` span, wrapped into a one-element array
pub fn single_object(text: &str) -> Option<String> {
    RE_OBJECT.find(text).map(|m| format!("[{}]", m.as_str()))
}

/// Strictly parses a candidate span and keeps the well-formed entries
///
/// Entries that are not objects, lack a string `title`/`reason`, or have
/// either field blank after trimming are dropped. Order is preserved.
pub fn parse_candidate(candidate: &str) -> Vec<Suggestion> {
    let Ok(items) = serde_json::from_str::<Vec<Value>>(candidate) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let title = item.get("title")?.as_str()?;
            let reason = item.get("reason")?.as_str()?;
            Suggestion::new(title, reason)
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Runs the strategy chain over model output
///
/// Returns an empty list when nothing usable is found; never fails.
pub fn extract_suggestions(text: &str) -> Vec<Suggestion> {
    extract_with(&STRATEGIES, text)
}

pub fn extract_with(strategies: &[(&str, Strategy)], text: &str) -> Vec<Suggestion> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    for (name, strategy) in strategies {
        let Some(candidate) = strategy(text) else {
            continue;
        };

        let suggestions = parse_candidate(&candidate);
        if suggestions.is_empty() {
            tracing::debug!(strategy = %name, "Candidate yielded no suggestions");
            continue;
        }

        tracing::debug!(
            strategy = %name,
            count = suggestions.len(),
            "Extracted suggestions"
        );
        return suggestions;
    }

    tracing::warn!(chars = text.len(), "No suggestions found in model output");
    Vec::new()
}
