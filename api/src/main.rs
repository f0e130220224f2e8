//! NeuroSync API Server
//!
//! Aggregates brain-computer-interface papers and news, adds a short LLM-written
//! synthesis, and serves the result from an in-process cache.
//! Laid out as ports & adapters: upstream services sit behind traits in `domain::ports`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use reqwest::Client;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    build_http_client, ArxivClient, GeminiClient, GoogleNewsClient, OpenAiCompatClient,
};
use app::{
    FeedService, FeedSettings, ModelDiscovery, NewsFetcher, PaperFetcher, ProviderChain,
    SynthesisService, GEMINI_FALLBACK_MODELS, OPENAI_FALLBACK_MODELS,
};
use config::{Config, LlmProviderKind};
use domain::ports::LlmProvider;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService>,
}

/// Build the HTTP router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/feed", get(handlers::get_feed))
        .fallback(handlers::not_found)
        // Wide open CORS; tighten before exposing beyond the dashboard
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wire one provider chain per configured LLM backend
fn build_provider_chains(config: &Config, http: &Client) -> Vec<ProviderChain> {
    config
        .llm_providers
        .iter()
        .enumerate()
        .map(|(position, kind)| {
            let (provider, fallbacks): (Arc<dyn LlmProvider>, &[&str]) = match kind {
                LlmProviderKind::Gemini => (
                    Arc::new(GeminiClient::new(
                        http.clone(),
                        config.gemini_base_url.clone(),
                        config.llm_api_key.clone(),
                    )),
                    &GEMINI_FALLBACK_MODELS[..],
                ),
                LlmProviderKind::OpenAi => (
                    Arc::new(OpenAiCompatClient::new(
                        http.clone(),
                        config.llm_base_url.clone(),
                        config.llm_api_key.clone(),
                    )),
                    &OPENAI_FALLBACK_MODELS[..],
                ),
            };

            // LLM_MODEL applies to the leading provider only
            let mut models: Vec<String> = Vec::new();
            if position == 0 {
                models.extend(config.llm_model.clone());
            }
            models.extend(fallbacks.iter().map(|m| m.to_string()));

            let chain = ProviderChain::new(provider, models);
            if config.model_discovery && *kind == LlmProviderKind::Gemini {
                chain.with_discovery(ModelDiscovery::for_gemini(config.model_discovery_ttl))
            } else {
                chain
            }
        })
        .collect()
}

fn build_feed_service(config: &Config, http: Client) -> FeedService {
    let papers = PaperFetcher::new(Arc::new(ArxivClient::new(
        http.clone(),
        config.arxiv_api_url.clone(),
    )));
    let news = NewsFetcher::new(
        Arc::new(GoogleNewsClient::new(
            http.clone(),
            config.news_search_url.clone(),
        )),
        config.news_per_keyword,
    );
    let synthesis = SynthesisService::new(
        config.llm_enabled(),
        build_provider_chains(config, &http),
        config.synthesis_style,
    );

    FeedService::new(
        papers,
        news,
        synthesis,
        FeedSettings {
            ttl: config.cache_ttl,
            article_cap: config.article_cap,
            paper_limit: config.paper_limit,
            news_limit: config.news_limit,
        },
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,neurosync_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NeuroSync Cortex...");

    // Load configuration
    let config = Config::from_env();
    if config.llm_enabled() {
        let providers: Vec<String> = config.llm_providers.iter().map(|p| p.to_string()).collect();
        tracing::info!("Synthesis providers: {}", providers.join(", "));
    } else {
        tracing::warn!("LLM_API_KEY not set, synthesis will run offline");
    }
    tracing::info!(
        "Feed cache TTL {}s, synthesis style {}",
        config.cache_ttl.as_secs(),
        config.synthesis_style
    );

    let http = build_http_client(config.http_timeout).context("Failed to build HTTP client")?;

    let state = AppState {
        feed_service: Arc::new(build_feed_service(&config, http)),
    };
    let app = app_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(providers: Vec<LlmProviderKind>, model: Option<&str>) -> Config {
        Config {
            llm_api_key: "key".to_string(),
            llm_model: model.map(str::to_string),
            llm_providers: providers,
            gemini_base_url: config::DEFAULT_GEMINI_BASE_URL.to_string(),
            llm_base_url: config::DEFAULT_OPENAI_BASE_URL.to_string(),
            model_discovery: true,
            model_discovery_ttl: Duration::from_secs(60),
            synthesis_style: app::PromptStyle::Cortex,
            cache_ttl: Duration::from_secs(3_600),
            article_cap: Some(50),
            paper_limit: 30,
            news_limit: 20,
            news_per_keyword: 5,
            arxiv_api_url: config::DEFAULT_ARXIV_API_URL.to_string(),
            news_search_url: config::DEFAULT_NEWS_SEARCH_URL.to_string(),
            http_timeout: Duration::from_secs(5),
            port: 8000,
        }
    }

    #[test]
    fn one_chain_per_configured_provider() {
        let chains = build_provider_chains(
            &config(
                vec![LlmProviderKind::OpenAi, LlmProviderKind::Gemini],
                Some("gpt-4o"),
            ),
            &Client::new(),
        );
        assert_eq!(chains.len(), 2);
    }

    #[tokio::test]
    async fn configured_router_answers_status() {
        use axum::body::{to_bytes, Body};
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let service = build_feed_service(
            &config(vec![LlmProviderKind::Gemini], None),
            Client::new(),
        );
        let app = app_router(AppState {
            feed_service: Arc::new(service),
        });

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["system"], "NeuroSync Cortex");
    }
}
