//! Paper search port trait
//!
//! Defines the interface for the academic-paper search service.

use async_trait::async_trait;

use crate::error::SourceError;

/// A paper as returned by the search service, before normalization
///
/// Fields stay raw so the fetcher decides which records are usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPaper {
    /// Entry identifier, usually an abstract URL
    pub id: String,
    pub title: String,
    pub summary: String,
    pub authors: Vec<String>,
    /// Publication timestamp as sent by the upstream (RFC 3339)
    pub published: Option<String>,
    pub pdf_url: Option<String>,
}

/// Client for an academic-paper search service
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Search papers matching `query`, newest submissions first
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawPaper>, SourceError>;
}
