//! Model discovery
//!
//! Asks a provider which models it currently serves and picks one that can
//! generate content, preferring a fixed priority list. The choice is cached
//! for its own TTL so the listing call stays off the per-refresh path.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::ports::{LlmProvider, ModelInfo};

pub const DISCOVERY_PRIORITY: [&str; 4] = [
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
    "gemini-1.5-pro",
    "gemini-pro",
];

/// Used when the listing call fails or offers nothing capable
pub const DISCOVERY_DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub struct ModelDiscovery {
    priority: Vec<String>,
    default_model: String,
    ttl: Duration,
    resolved: Mutex<Option<(Instant, String)>>,
}

impl ModelDiscovery {
    pub fn new(priority: Vec<String>, default_model: String, ttl: Duration) -> Self {
        Self {
            priority,
            default_model,
            ttl,
            resolved: Mutex::new(None),
        }
    }

    /// Discovery tuned for the generative-AI REST provider
    pub fn for_gemini(ttl: Duration) -> Self {
        Self::new(
            DISCOVERY_PRIORITY.iter().map(|m| m.to_string()).collect(),
            DISCOVERY_DEFAULT_MODEL.to_string(),
            ttl,
        )
    }

    /// Resolve the model to try first, probing the provider at most once per TTL
    pub async fn resolve(&self, provider: &dyn LlmProvider) -> String {
        let mut resolved = self.resolved.lock().await;
        if let Some((at, model)) = resolved.as_ref() {
            if at.elapsed() < self.ttl {
                return model.clone();
            }
        }

        let model = match provider.list_models().await {
            Ok(models) => select_model(&models, &self.priority).unwrap_or_else(|| {
                warn!(
                    "{} lists no content-generation models, using {}",
                    provider.name(),
                    self.default_model
                );
                self.default_model.clone()
            }),
            Err(e) => {
                warn!(
                    "Model discovery on {} failed: {}, using {}",
                    provider.name(),
                    e,
                    self.default_model
                );
                self.default_model.clone()
            }
        };

        debug!("Discovered model for {}: {}", provider.name(), model);
        *resolved = Some((Instant::now(), model.clone()));
        model
    }
}

/// First priority model that is capable, else any capable model
pub fn select_model(models: &[ModelInfo], priority: &[String]) -> Option<String> {
    let capable: Vec<&ModelInfo> = models.iter().filter(|m| m.supports_generation).collect();

    priority
        .iter()
        .find(|wanted| capable.iter().any(|m| &m.id == *wanted))
        .cloned()
        .or_else(|| capable.first().map(|m| m.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{model, StubLlmProvider};

    fn priority() -> Vec<String> {
        DISCOVERY_PRIORITY.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn prefers_priority_order_over_listing_order() {
        let models = vec![
            model("gemini-pro", true),
            model("gemini-1.5-flash-latest", true),
        ];
        assert_eq!(
            select_model(&models, &priority()),
            Some("gemini-1.5-flash-latest".to_string())
        );
    }

    #[test]
    fn ignores_models_without_generation() {
        let models = vec![
            model("gemini-1.5-flash", false),
            model("gemini-2.0-experimental", true),
        ];
        assert_eq!(
            select_model(&models, &priority()),
            Some("gemini-2.0-experimental".to_string())
        );
    }

    #[test]
    fn nothing_capable_selects_none() {
        let models = vec![model("embedding-001", false)];
        assert_eq!(select_model(&models, &priority()), None);
    }

    #[tokio::test]
    async fn listing_failure_falls_back_to_default() {
        let provider = StubLlmProvider::new("gemini");
        let discovery = ModelDiscovery::for_gemini(Duration::from_secs(60));

        assert_eq!(discovery.resolve(&provider).await, DISCOVERY_DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn result_is_cached_within_ttl() {
        let provider = StubLlmProvider::new("gemini").with_models(vec![model("gemini-pro", true)]);
        let discovery = ModelDiscovery::for_gemini(Duration::from_secs(60));

        assert_eq!(discovery.resolve(&provider).await, "gemini-pro");
        assert_eq!(discovery.resolve(&provider).await, "gemini-pro");
        assert_eq!(provider.list_calls(), 1);
    }

    #[tokio::test]
    async fn expired_result_is_probed_again() {
        let provider = StubLlmProvider::new("gemini").with_models(vec![model("gemini-pro", true)]);
        let discovery = ModelDiscovery::for_gemini(Duration::ZERO);

        discovery.resolve(&provider).await;
        discovery.resolve(&provider).await;
        assert_eq!(provider.list_calls(), 2);
    }
}
