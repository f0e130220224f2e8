//! Article domain entity
//!
//! The normalized unit of content served in the feed. Papers and news items
//! from different upstreams are mapped into this single shape.

use serde::{Deserialize, Serialize};

/// Character budget for an article summary (before the marker)
pub const SUMMARY_CHAR_LIMIT: usize = 300;

/// Marker appended to every summary after truncation
pub const TRUNCATION_MARKER: &str = "...";

/// Placeholder author for papers without an author list
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Kind of content an article links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleKind {
    Paper,
    News,
}

impl std::fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleKind::Paper => write!(f, "paper"),
            ArticleKind::News => write!(f, "news"),
        }
    }
}

/// A paper or news article in the feed
///
/// `id` is unique within one feed batch only; news ids are positional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub author: Option<String>,
    /// `YYYY-MM-DD`; fetch date for news items
    pub date: String,
    #[serde(rename = "type")]
    pub kind: ArticleKind,
    pub url: String,
}

/// Collapse every whitespace run (newlines included) into a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and cut a summary to the character budget, then append the marker
///
/// Counts Unicode scalar values so multi-byte text is never split mid-char.
pub fn truncate_summary(text: &str) -> String {
    let mut summary: String = collapse_whitespace(text)
        .chars()
        .take(SUMMARY_CHAR_LIMIT)
        .collect();
    summary.push_str(TRUNCATION_MARKER);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_joins_lines() {
        assert_eq!(
            collapse_whitespace("Decoding\nspeech  from\r\n\tcortex "),
            "Decoding speech from cortex"
        );
    }

    #[test]
    fn long_summary_is_cut_to_budget() {
        let long = "a".repeat(1000);
        let summary = truncate_summary(&long);
        assert_eq!(summary.chars().count(), SUMMARY_CHAR_LIMIT + 3);
        assert!(summary.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn short_summary_keeps_text_and_gets_marker() {
        assert_eq!(truncate_summary("Short abstract."), "Short abstract....");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(400);
        let summary = truncate_summary(&long);
        assert_eq!(summary.chars().count(), 303);
        assert!(summary.starts_with("éé"));
    }

    #[test]
    fn article_serializes_kind_as_type() {
        let article = Article {
            id: "2401.00001v1".to_string(),
            title: "Title".to_string(),
            summary: "Summary...".to_string(),
            source: "arXiv".to_string(),
            author: Some("Ada".to_string()),
            date: "2024-01-02".to_string(),
            kind: ArticleKind::Paper,
            url: "https://arxiv.org/pdf/2401.00001v1".to_string(),
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["type"], "paper");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn article_kind_display() {
        assert_eq!(ArticleKind::Paper.to_string(), "paper");
        assert_eq!(ArticleKind::News.to_string(), "news");
    }
}
