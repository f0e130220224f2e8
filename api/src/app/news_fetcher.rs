//! News fetcher
//!
//! Runs a fixed set of keyword searches against the news service and collects
//! the hits into one list of news articles. News is non-critical: a failed
//! keyword is logged and skipped, and total failure yields an empty list.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use super::fetch_outcome::FetchOutcome;
use crate::domain::entities::{collapse_whitespace, truncate_summary, Article, ArticleKind};
use crate::domain::ports::{NewsSource, RawNewsItem};

pub const NEWS_KEYWORDS: [&str; 3] = [
    "Brain Computer Interface News",
    "Neuralink Updates",
    "Non-invasive BCI",
];

/// Placeholder author; the news service does not expose bylines
pub const NEWS_AUTHOR: &str = "Industry Press";

const UNKNOWN_SOURCE: &str = "Web";

pub struct NewsFetcher {
    source: Arc<dyn NewsSource>,
    per_keyword: usize,
}

impl NewsFetcher {
    pub fn new(source: Arc<dyn NewsSource>, per_keyword: usize) -> Self {
        Self {
            source,
            per_keyword,
        }
    }

    /// Fetch up to `limit` news articles across all keywords
    ///
    /// Ids are `news-<n>` where `n` is the running count, so they are only
    /// unique within one call.
    pub async fn fetch(&self, limit: usize) -> FetchOutcome {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let mut articles: Vec<Article> = Vec::new();
        let mut failures = Vec::new();

        'keywords: for keyword in NEWS_KEYWORDS {
            if articles.len() >= limit {
                break;
            }

            let items = match self.source.search_news(keyword, self.per_keyword).await {
                Ok(items) => items,
                Err(e) => {
                    warn!("News fetch failed for '{}': {}", keyword, e);
                    failures.push(format!("{}: {}", keyword, e));
                    continue;
                }
            };

            for item in items {
                match map_news(item, articles.len(), &today) {
                    Some(article) => articles.push(article),
                    None => debug!("Skipping news item without title or url"),
                }
                if articles.len() >= limit {
                    break 'keywords;
                }
            }
        }

        if failures.is_empty() {
            FetchOutcome::Complete(articles)
        } else {
            FetchOutcome::Degraded {
                articles,
                reason: failures.join("; "),
            }
        }
    }
}

fn map_news(item: RawNewsItem, position: usize, today: &str) -> Option<Article> {
    let title = item
        .title
        .map(|t| collapse_whitespace(&t))
        .filter(|t| !t.is_empty())?;
    let url = item
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())?;

    Some(Article {
        id: format!("news-{}", position),
        title,
        summary: truncate_summary(item.body.as_deref().unwrap_or_default()),
        source: item
            .source
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        author: Some(NEWS_AUTHOR.to_string()),
        date: today.to_string(),
        kind: ArticleKind::News,
        url,
    })
}
