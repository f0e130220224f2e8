//! Paper fetcher
//!
//! Pulls the newest BCI papers from the paper search service and normalizes
//! them into articles. Malformed records are skipped one by one; an unreachable
//! upstream produces an empty, degraded outcome.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::fetch_outcome::FetchOutcome;
use crate::domain::entities::{
    collapse_whitespace, truncate_summary, Article, ArticleKind, UNKNOWN_AUTHOR,
};
use crate::domain::ports::{PaperSource, RawPaper};

/// Fixed topical query: BCI / neurofeedback / neural link in neuroscience and HCI
pub const PAPER_QUERY: &str = r#"(cat:q-bio.NC OR cat:cs.HC) AND ("brain computer interface" OR "neurofeedback" OR "neural link")"#;

pub const PAPER_SOURCE_NAME: &str = "arXiv";

pub struct PaperFetcher {
    source: Arc<dyn PaperSource>,
}

impl PaperFetcher {
    pub fn new(source: Arc<dyn PaperSource>) -> Self {
        Self { source }
    }

    /// Fetch up to `limit` papers, most recent first
    pub async fn fetch(&self, limit: usize) -> FetchOutcome {
        let raw = match self.source.search(PAPER_QUERY, limit).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Paper fetch failed: {}", e);
                return FetchOutcome::Degraded {
                    articles: Vec::new(),
                    reason: e.to_string(),
                };
            }
        };

        let received = raw.len();
        let mut articles: Vec<Article> = raw
            .into_iter()
            .filter_map(|paper| match map_paper(paper) {
                Ok(article) => Some(article),
                Err(reason) => {
                    warn!("Skipping paper: {}", reason);
                    None
                }
            })
            .collect();

        // Stable, so same-day papers keep the upstream submission order
        articles.sort_by(|a, b| b.date.cmp(&a.date));
        articles.truncate(limit);

        debug!("Mapped {} of {} papers", articles.len(), received);
        FetchOutcome::Complete(articles)
    }
}

/// Normalize one search result, rejecting records that cannot form an article
fn map_paper(paper: RawPaper) -> Result<Article, String> {
    let id = paper
        .id
        .trim()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    if id.is_empty() {
        return Err("missing entry id".to_string());
    }

    let title = collapse_whitespace(&paper.title);
    if title.is_empty() {
        return Err(format!("{}: missing title", id));
    }

    let published = paper
        .published
        .as_deref()
        .ok_or_else(|| format!("{}: missing published date", id))?;
    let date = DateTime::parse_from_rfc3339(published.trim())
        .map_err(|e| format!("{}: bad published date {:?}: {}", id, published, e))?
        .with_timezone(&Utc)
        .format("%Y-%m-%d")
        .to_string();

    let url = paper
        .pdf_url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| format!("{}: missing pdf url", id))?;

    let author = paper
        .authors
        .into_iter()
        .next()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    Ok(Article {
        id,
        title,
        summary: truncate_summary(&paper.summary),
        source: PAPER_SOURCE_NAME.to_string(),
        author: Some(author),
        date,
        kind: ArticleKind::Paper,
        url,
    })
}
