use serde::{Deserialize, Serialize};

/// A title/reason pair recovered from generated text, before enrichment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub reason: String,
}

impl Suggestion {
    /// Trims both fields; `None` when either ends up empty
    pub fn new(title: &str, reason: &str) -> Option<Self> {
        let title = title.trim();
        let reason = reason.trim();
        if title.is_empty() || reason.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            reason: reason.to_string(),
        })
    }
}

/// Normalized movie metadata attached to a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieDetail {
    pub title: String,
    /// Four-digit release year, empty when unknown
    pub year: String,
    pub plot: String,
    /// Absolute poster URL; the key is omitted when there is no poster
    #[serde(rename = "poster", skip_serializing_if = "Option::is_none", default)]
    pub poster_url: Option<String>,
    pub director: String,
}

/// Unit returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub reason: String,
    pub details: Option<MovieDetail>,
}

impl Recommendation {
    pub fn new(suggestion: Suggestion, details: Option<MovieDetail>) -> Self {
        Self {
            title: suggestion.title,
            reason: suggestion.reason,
            details,
        }
    }
}
