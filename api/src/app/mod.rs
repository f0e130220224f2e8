//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod feed_service;
pub mod fetch_outcome;
pub mod model_discovery;
pub mod news_fetcher;
pub mod paper_fetcher;
pub mod synthesis_service;

pub use feed_service::{FeedService, FeedSettings};
pub use model_discovery::ModelDiscovery;
pub use news_fetcher::NewsFetcher;
pub use paper_fetcher::PaperFetcher;
pub use synthesis_service::{
    PromptStyle, ProviderChain, SynthesisService, GEMINI_FALLBACK_MODELS, OPENAI_FALLBACK_MODELS,
};
