//! arXiv API client
//!
//! Queries `export.arxiv.org/api/query` and maps Atom entries into `RawPaper`s.
//! See: https://info.arxiv.org/help/api/user-manual.html

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::adapters::http::error_body;
use crate::domain::ports::{PaperSource, RawPaper};
use crate::error::SourceError;

/// Client for the arXiv query API
pub struct ArxivClient {
    http: Client,
    api_url: String,
}

impl ArxivClient {
    pub fn new(http: Client, api_url: String) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    published: Option<String>,
    #[serde(rename = "author", default)]
    authors: Vec<AtomAuthor>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
}

#[derive(Debug, Deserialize)]
struct AtomAuthor {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
    #[serde(rename = "@title")]
    title: Option<String>,
    #[serde(rename = "@type")]
    mime: Option<String>,
}

impl AtomEntry {
    fn pdf_url(&self) -> Option<String> {
        self.links
            .iter()
            .find(|l| l.title.as_deref() == Some("pdf"))
            .or_else(|| {
                self.links
                    .iter()
                    .find(|l| l.mime.as_deref() == Some("application/pdf"))
            })
            .and_then(|l| l.href.clone())
    }

    fn into_raw(self) -> RawPaper {
        let pdf_url = self.pdf_url();
        RawPaper {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            authors: self
                .authors
                .into_iter()
                .filter_map(|a| a.name)
                .filter(|n| !n.trim().is_empty())
                .collect(),
            published: self.published,
            pdf_url,
        }
    }
}

/// Parse an arXiv Atom response body
pub fn parse_feed(xml: &str) -> Result<Vec<RawPaper>, SourceError> {
    let feed: AtomFeed = quick_xml::de::from_str(xml)?;
    Ok(feed.entries.into_iter().map(AtomEntry::into_raw).collect())
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawPaper>, SourceError> {
        let max_results = max_results.to_string();
        debug!("arXiv search: query='{}', max_results={}", query, max_results);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("search_query", query),
                ("start", "0"),
                ("max_results", max_results.as_str()),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let body = response.text().await?;
        let papers = parse_feed(&body)?;
        debug!("arXiv returned {} entries", papers.len());
        Ok(papers)
    }
}
