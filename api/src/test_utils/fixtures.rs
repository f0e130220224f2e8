//! Test fixtures
//!
//! Factory functions for upstream records and articles with sensible defaults.

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::{Article, ArticleKind};
use crate::domain::ports::{ModelInfo, RawNewsItem, RawPaper};

/// A well-formed arXiv-style search result
pub fn raw_paper(id: &str, published: &str) -> RawPaper {
    RawPaper {
        id: format!("http://arxiv.org/abs/{}", id),
        title: format!("Paper {} on\n  neural decoding", id),
        summary: "We decode intended movement from motor cortex.".to_string(),
        authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
        published: Some(published.to_string()),
        pdf_url: Some(format!("http://arxiv.org/pdf/{}", id)),
    }
}

/// `count` papers with ids `0..count`, newest first
pub fn raw_papers(count: usize) -> Vec<RawPaper> {
    let newest = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let published = newest - Duration::days(i as i64);
            raw_paper(&i.to_string(), &published.to_rfc3339())
        })
        .collect()
}

/// `count` news hits
pub fn raw_news(count: usize) -> Vec<RawNewsItem> {
    (0..count)
        .map(|i| RawNewsItem {
            title: Some(format!("BCI story {}", i)),
            body: Some(format!("Body of story {}", i)),
            source: Some("Neuro Wire".to_string()),
            url: Some(format!("https://news.example/story-{}", i)),
        })
        .collect()
}

/// A normalized paper article titled `Paper <id>`
pub fn paper_article(id: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Paper {}", id),
        summary: "Summary....".to_string(),
        source: "arXiv".to_string(),
        author: Some("Ada Lovelace".to_string()),
        date: "2024-01-01".to_string(),
        kind: ArticleKind::Paper,
        url: format!("https://arxiv.org/pdf/{}", id),
    }
}

pub fn model(id: &str, supports_generation: bool) -> ModelInfo {
    ModelInfo {
        id: id.to_string(),
        supports_generation,
    }
}
