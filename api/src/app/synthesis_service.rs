//! Synthesis service
//!
//! Produces the short commentary paragraph that accompanies the feed. Providers
//! and their models form an ordered fallback chain; the first candidate that
//! returns text wins. This service never fails: a missing credential or an
//! exhausted chain yields a fixed fallback message instead.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::model_discovery::ModelDiscovery;
use crate::domain::entities::Article;
use crate::domain::ports::LlmProvider;

/// Returned without any network call when no credential is configured
pub const OFFLINE_SYNTHESIS: &str = "Synthesis Offline: API Key missing in Cortex configuration.";

/// Returned when every candidate in the chain failed
pub const UNAVAILABLE_SYNTHESIS: &str = "Neural uplink unstable. All AI models unresponsive.";

/// Max titles embedded in the prompt
pub const PROMPT_TITLE_LIMIT: usize = 30;

pub const GEMINI_FALLBACK_MODELS: [&str; 3] =
    ["gemini-1.5-flash", "gemini-1.5-flash-latest", "gemini-pro"];
pub const OPENAI_FALLBACK_MODELS: [&str; 2] = ["gpt-4o-mini", "gpt-3.5-turbo"];

/// Voice of the synthesis paragraph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptStyle {
    /// Sci-fi "Daily Synthesis" briefing, max 80 words
    #[default]
    Cortex,
    /// Professional research digest in two short paragraphs
    Analyst,
}

impl std::fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptStyle::Cortex => write!(f, "cortex"),
            PromptStyle::Analyst => write!(f, "analyst"),
        }
    }
}

impl std::str::FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cortex" | "scifi" | "sci-fi" => Ok(PromptStyle::Cortex),
            "analyst" | "professional" => Ok(PromptStyle::Analyst),
            _ => Err(format!("Unknown synthesis style: {}", s)),
        }
    }
}

/// What the synthesis step produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisOutcome {
    Generated {
        text: String,
        provider: String,
        model: String,
    },
    /// No credential configured
    Offline,
    /// Every candidate failed
    Unavailable,
}

impl SynthesisOutcome {
    pub fn text(&self) -> &str {
        match self {
            SynthesisOutcome::Generated { text, .. } => text,
            SynthesisOutcome::Offline => OFFLINE_SYNTHESIS,
            SynthesisOutcome::Unavailable => UNAVAILABLE_SYNTHESIS,
        }
    }

    /// `provider/model` that wrote the text, `None` for fixed fallbacks
    pub fn generated_by(&self) -> Option<String> {
        match self {
            SynthesisOutcome::Generated {
                provider, model, ..
            } => Some(format!("{}/{}", provider, model)),
            _ => None,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            SynthesisOutcome::Generated { text, .. } => text,
            other => other.text().to_string(),
        }
    }
}

/// One provider and the models to try on it, in order
pub struct ProviderChain {
    provider: Arc<dyn LlmProvider>,
    models: Vec<String>,
    discovery: Option<ModelDiscovery>,
}

impl ProviderChain {
    pub fn new(provider: Arc<dyn LlmProvider>, models: Vec<String>) -> Self {
        Self {
            provider,
            models,
            discovery: None,
        }
    }

    /// Probe the provider for a model to try before the static list
    pub fn with_discovery(mut self, discovery: ModelDiscovery) -> Self {
        self.discovery = Some(discovery);
        self
    }

    /// Candidate models, deduplicated, discovered model first
    async fn candidate_models(&self) -> Vec<String> {
        let mut models = Vec::with_capacity(self.models.len() + 1);
        if let Some(discovery) = &self.discovery {
            models.push(discovery.resolve(self.provider.as_ref()).await);
        }
        for model in &self.models {
            if !models.contains(model) {
                models.push(model.clone());
            }
        }
        models
    }
}

pub struct SynthesisService {
    credential_configured: bool,
    chains: Vec<ProviderChain>,
    style: PromptStyle,
}

impl SynthesisService {
    pub fn new(credential_configured: bool, chains: Vec<ProviderChain>, style: PromptStyle) -> Self {
        Self {
            credential_configured,
            chains,
            style,
        }
    }

    /// Write a synthesis for the combined article list
    pub async fn synthesize(&self, articles: &[Article]) -> SynthesisOutcome {
        if !self.credential_configured {
            debug!("No LLM credential configured, synthesis offline");
            return SynthesisOutcome::Offline;
        }

        let prompt = build_prompt(self.style, articles);

        for chain in &self.chains {
            let provider = chain.provider.name();
            for model in chain.candidate_models().await {
                match chain.provider.generate(&model, &prompt).await {
                    Ok(text) if !text.trim().is_empty() => {
                        info!("Synthesis generated by {}/{}", provider, model);
                        return SynthesisOutcome::Generated {
                            text: text.trim().to_string(),
                            provider: provider.to_string(),
                            model,
                        };
                    }
                    Ok(_) => warn!("Model {}/{} returned blank text", provider, model),
                    Err(e) => warn!("Model {}/{} failed: {}", provider, model, e),
                }
            }
        }

        warn!("Every synthesis candidate failed");
        SynthesisOutcome::Unavailable
    }
}

/// Build the synthesis prompt from the leading article titles
pub fn build_prompt(style: PromptStyle, articles: &[Article]) -> String {
    let titles = articles
        .iter()
        .take(PROMPT_TITLE_LIMIT)
        .map(|a| format!("- {}", a.title))
        .collect::<Vec<_>>()
        .join("\n");

    match style {
        PromptStyle::Cortex => format!(
            r#"You are the "Cortex" of a BCI research dashboard.
Here is a list of incoming data streams (papers and news):

{titles}

TASK: Write a high-level, sci-fi style "Daily Synthesis" (max 80 words).
Focus on the convergence of biology and machine. Use terms like "Signal detected," "Trajectory," "Neural integration."
Do NOT use bullet points. Write it as a single briefing paragraph."#
        ),
        PromptStyle::Analyst => format!(
            r#"You are a research analyst covering brain-computer interfaces.
These are today's newest papers and industry headlines:

{titles}

TASK: Write a professional synthesis of about 100 words in exactly two short paragraphs.
The first paragraph summarizes the dominant research themes; the second notes what the industry news implies for the field.
Do NOT use bullet points or headings."#
        ),
    }
}
