//! Google News RSS client
//!
//! Runs keyword searches against the Google News RSS endpoint and maps channel
//! items into `RawNewsItem`s. Item publication dates are ignored.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

use crate::adapters::http::error_body;
use crate::domain::entities::collapse_whitespace;
use crate::domain::ports::{NewsSource, RawNewsItem};
use crate::error::SourceError;

/// Client for Google News keyword search
pub struct GoogleNewsClient {
    http: Client,
    search_url: String,
}

impl GoogleNewsClient {
    pub fn new(http: Client, search_url: String) -> Self {
        Self {
            http,
            search_url: search_url.trim_end_matches('/').to_string(),
        }
    }
}

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

/// Strip HTML tags and the few entities Google News emits in descriptions
pub fn strip_html(html: &str) -> String {
    let text = tag_pattern().replace_all(html, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        // Last, so `&amp;lt;` stays `&lt;`
        .replace("&amp;", "&");
    collapse_whitespace(&text)
}

/// Split "Headline - Publisher" into its parts
fn split_publisher(title: &str) -> (String, Option<String>) {
    match title.rsplit_once(" - ") {
        Some((headline, publisher)) if !headline.trim().is_empty() && !publisher.trim().is_empty() => {
            (headline.trim().to_string(), Some(publisher.trim().to_string()))
        }
        _ => (title.trim().to_string(), None),
    }
}

fn map_item(item: &rss::Item) -> RawNewsItem {
    let (title, publisher) = match item.title() {
        Some(raw) => {
            let (headline, publisher) = split_publisher(raw);
            (Some(headline), publisher)
        }
        None => (None, None),
    };

    let source = item
        .source()
        .and_then(|s| s.title())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or(publisher);

    RawNewsItem {
        title,
        body: item.description().map(strip_html),
        source,
        url: item.link().map(|l| l.trim().to_string()),
    }
}

/// Parse a Google News RSS body
pub fn parse_channel(body: &[u8]) -> Result<Vec<RawNewsItem>, SourceError> {
    let channel = rss::Channel::read_from(body)?;
    Ok(channel.items().iter().map(map_item).collect())
}

#[async_trait]
impl NewsSource for GoogleNewsClient {
    async fn search_news(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<RawNewsItem>, SourceError> {
        debug!("News search: keyword='{}', limit={}", keyword, max_results);

        let response = self
            .http
            .get(&self.search_url)
            .query(&[
                ("q", keyword),
                ("hl", "en-US"),
                ("gl", "US"),
                ("ceid", "US:en"),
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

        let body = response.bytes().await?;
        let mut items = parse_channel(&body[..])?;
        items.truncate(max_results);
        Ok(items)
    }
}
