use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::app::PromptStyle;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";
pub const DEFAULT_NEWS_SEARCH_URL: &str = "https://news.google.com/rss/search";

/// LLM backends the synthesis chain can call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    /// Generative-AI REST endpoint (`generateContent`)
    Gemini,
    /// OpenAI-compatible chat completions
    OpenAi,
}

impl std::fmt::Display for LlmProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProviderKind::Gemini => write!(f, "gemini"),
            LlmProviderKind::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for LlmProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProviderKind::Gemini),
            "openai" | "openai-compatible" => Ok(LlmProviderKind::OpenAi),
            _ => Err(format!("Unknown LLM provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the LLM provider; empty disables synthesis calls
    pub llm_api_key: String,
    /// Preferred model of the first provider in the chain
    pub llm_model: Option<String>,
    pub llm_providers: Vec<LlmProviderKind>,
    pub gemini_base_url: String,
    /// Base URL of the OpenAI-compatible provider
    pub llm_base_url: String,
    pub model_discovery: bool,
    pub model_discovery_ttl: Duration,
    pub synthesis_style: PromptStyle,
    /// Freshness window of the cached feed
    pub cache_ttl: Duration,
    /// Max articles per response, `None` when uncapped
    pub article_cap: Option<usize>,
    pub paper_limit: usize,
    pub news_limit: usize,
    pub news_per_keyword: usize,
    pub arxiv_api_url: String,
    pub news_search_url: String,
    pub http_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let llm_providers = env::var("LLM_PROVIDERS")
            .map(|raw| parse_providers(&raw))
            .unwrap_or_default();

        Self {
            llm_api_key: env::var("LLM_API_KEY").unwrap_or_default().trim().to_string(),
            llm_model: env::var("LLM_MODEL")
                .ok()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
            llm_providers: if llm_providers.is_empty() {
                vec![LlmProviderKind::Gemini]
            } else {
                llm_providers
            },
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            model_discovery: env_parse("LLM_MODEL_DISCOVERY", true),
            model_discovery_ttl: Duration::from_secs(env_parse("MODEL_DISCOVERY_TTL_SECS", 21_600)),
            synthesis_style: env::var("SYNTHESIS_STYLE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            cache_ttl: Duration::from_secs(env_parse("CACHE_TTL_SECS", 3_600)),
            article_cap: match env_parse("FEED_ARTICLE_CAP", 50usize) {
                0 => None,
                cap => Some(cap),
            },
            paper_limit: env_parse("PAPER_LIMIT", 30),
            news_limit: env_parse("NEWS_LIMIT", 20),
            news_per_keyword: env_parse("NEWS_PER_KEYWORD", 5),
            arxiv_api_url: env::var("ARXIV_API_URL")
                .unwrap_or_else(|_| DEFAULT_ARXIV_API_URL.to_string()),
            news_search_url: env::var("NEWS_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_SEARCH_URL.to_string()),
            http_timeout: Duration::from_secs(env_parse("HTTP_TIMEOUT_SECS", 30)),
            port: env_parse("PORT", 8000),
        }
    }

    /// Check if an LLM credential is configured
    pub fn llm_enabled(&self) -> bool {
        !self.llm_api_key.is_empty()
    }
}

/// Read and parse an env var, falling back to `default` when absent or malformed
fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse a comma separated provider list, skipping unknown entries and duplicates
fn parse_providers(raw: &str) -> Vec<LlmProviderKind> {
    let mut providers = Vec::new();
    for entry in raw.split(',').filter(|e| !e.trim().is_empty()) {
        match entry.parse::<LlmProviderKind>() {
            Ok(kind) if !providers.contains(&kind) => providers.push(kind),
            Ok(_) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }
    providers
}
