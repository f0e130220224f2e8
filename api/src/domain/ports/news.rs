//! News search port trait
//!
//! Defines the interface for the web news search service. The upstream does
//! not expose a reliable publication date, so none is modelled.

use async_trait::async_trait;

use crate::error::SourceError;

/// A news hit as returned by the search service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNewsItem {
    pub title: Option<String>,
    pub body: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
}

/// Client for a web news search service
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search news articles for a keyword string
    async fn search_news(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<RawNewsItem>, SourceError>;
}
