//! Feed service
//!
//! Owns the cached `FeedResponse` and rebuilds it when stale. A rebuild runs
//! the paper and news fetchers, asks the synthesis service for commentary and
//! caps the combined list. Only one rebuild runs at a time; requests that queue
//! behind it reuse its result instead of hitting the upstreams again.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::news_fetcher::NewsFetcher;
use super::paper_fetcher::PaperFetcher;
use super::synthesis_service::SynthesisService;
use crate::domain::entities::FeedResponse;

/// Tunables for one feed computation
#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// Freshness window
    pub ttl: Duration,
    /// Max articles in a response, `None` when uncapped
    pub article_cap: Option<usize>,
    pub paper_limit: usize,
    pub news_limit: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3_600),
            article_cap: Some(50),
            paper_limit: 30,
            news_limit: 20,
        }
    }
}

struct CachedFeed {
    response: Arc<FeedResponse>,
    computed_at: Instant,
}

pub struct FeedService {
    papers: PaperFetcher,
    news: NewsFetcher,
    synthesis: SynthesisService,
    settings: FeedSettings,
    cache: RwLock<Option<CachedFeed>>,
    refresh: Mutex<()>,
}

impl FeedService {
    pub fn new(
        papers: PaperFetcher,
        news: NewsFetcher,
        synthesis: SynthesisService,
        settings: FeedSettings,
    ) -> Self {
        Self {
            papers,
            news,
            synthesis,
            settings,
            cache: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Serve the cached feed if fresh, otherwise rebuild it
    pub async fn get_feed(&self) -> Arc<FeedResponse> {
        if let Some(response) = self.fresh().await {
            debug!("Feed cache hit");
            return response;
        }

        let _refresh = self.refresh.lock().await;

        // Another request may have refreshed while we waited
        if let Some(response) = self.fresh().await {
            debug!("Feed refreshed by a concurrent request");
            return response;
        }

        debug!("Feed cache stale, rebuilding");
        let computed_at = Instant::now();
        let response = Arc::new(self.build().await);

        *self.cache.write().await = Some(CachedFeed {
            response: response.clone(),
            computed_at,
        });

        response
    }

    async fn fresh(&self) -> Option<Arc<FeedResponse>> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|c| c.computed_at.elapsed() < self.settings.ttl)
            .map(|c| c.response.clone())
    }

    async fn build(&self) -> FeedResponse {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let (papers, news) = tokio::join!(
            self.papers.fetch(self.settings.paper_limit),
            self.news.fetch(self.settings.news_limit),
        );

        if let Some(reason) = papers.degraded_reason() {
            warn!("Serving feed without complete paper data: {}", reason);
        }
        if let Some(reason) = news.degraded_reason() {
            warn!("Serving feed without complete news data: {}", reason);
        }

        let paper_count = papers.articles().len();
        let news_count = news.articles().len();

        let mut articles = papers.into_articles();
        articles.extend(news.into_articles());

        let synthesis = self.synthesis.synthesize(&articles).await;

        if let Some(cap) = self.settings.article_cap {
            articles.truncate(cap);
        }

        info!(
            "Feed rebuilt: {} papers, {} news, {} served, synthesis from {}",
            paper_count,
            news_count,
            articles.len(),
            synthesis.generated_by().as_deref().unwrap_or("fallback text")
        );

        FeedResponse {
            synthesis: synthesis.into_text(),
            timestamp,
            articles,
        }
    }
}
