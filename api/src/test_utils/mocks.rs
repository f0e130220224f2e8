//! Stub implementations of port traits
//!
//! In-memory stand-ins for the paper, news and LLM upstreams. They record
//! every call so tests can verify which upstreams were (or were not) hit.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::ports::{
    LlmProvider, ModelInfo, NewsSource, PaperSource, RawNewsItem, RawPaper,
};
use crate::error::{LlmError, SourceError};

// ============================================================================
// Paper source
// ============================================================================

#[derive(Default)]
pub struct StubPaperSource {
    papers: Vec<RawPaper>,
    fail: bool,
    delay: Option<Duration>,
    queries: Mutex<Vec<(String, usize)>>,
}

impl StubPaperSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_papers(mut self, papers: Vec<RawPaper>) -> Self {
        self.papers = papers;
        self
    }

    /// Every search fails as if the upstream were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Sleep before answering, to widen race windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl PaperSource for StubPaperSource {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawPaper>, SourceError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(SourceError::Api {
                status: 503,
                message: "paper search unavailable".to_string(),
            });
        }

        Ok(self.papers.iter().take(max_results).cloned().collect())
    }
}

// ============================================================================
// News source
// ============================================================================

/// Returns the same items for every keyword
#[derive(Default)]
pub struct StubNewsSource {
    items: Vec<RawNewsItem>,
    fail_all: bool,
    failing_keywords: HashSet<String>,
    keywords: Mutex<Vec<String>>,
}

impl StubNewsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: Vec<RawNewsItem>) -> Self {
        self.items = items;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn failing_keyword(mut self, keyword: &str) -> Self {
        self.failing_keywords.insert(keyword.to_string());
        self
    }

    /// Keywords searched so far, in call order
    pub fn keywords(&self) -> Vec<String> {
        self.keywords.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSource for StubNewsSource {
    async fn search_news(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<RawNewsItem>, SourceError> {
        self.keywords.lock().unwrap().push(keyword.to_string());

        if self.fail_all || self.failing_keywords.contains(keyword) {
            return Err(SourceError::Parse(format!("no results page for {}", keyword)));
        }

        Ok(self.items.iter().take(max_results).cloned().collect())
    }
}

// ============================================================================
// LLM providers
// ============================================================================

/// Scripted provider: each model either replies with fixed text or fails
pub struct StubLlmProvider {
    name: String,
    replies: HashMap<String, String>,
    failing: HashSet<String>,
    models: Option<Vec<ModelInfo>>,
    generated: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
    list_calls: AtomicUsize,
}

impl StubLlmProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            replies: HashMap::new(),
            failing: HashSet::new(),
            models: None,
            generated: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(mut self, model: &str, text: &str) -> Self {
        self.replies.insert(model.to_string(), text.to_string());
        self
    }

    /// Model answers with a quota error
    pub fn failing_model(mut self, model: &str) -> Self {
        self.failing.insert(model.to_string());
        self
    }

    /// Enable model listing; without it `list_models` is unsupported
    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = Some(models);
        self
    }

    /// Models passed to `generate`, in call order
    pub fn generated_models(&self) -> Vec<String> {
        self.generated.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubLlmProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        self.generated.lock().unwrap().push(model.to_string());
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.failing.contains(model) {
            return Err(LlmError::Quota(format!("{} quota exceeded", model)));
        }

        self.replies
            .get(model)
            .cloned()
            .ok_or_else(|| LlmError::UnsupportedModel(model.to_string()))
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.models {
            Some(models) => Ok(models.clone()),
            None => Err(LlmError::Unsupported(format!(
                "{} does not list models",
                self.name
            ))),
        }
    }
}

/// Provider whose every call fails
pub struct FailingLlmProvider {
    name: String,
}

impl FailingLlmProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for FailingLlmProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 500,
            message: "internal".to_string(),
        })
    }
}

/// Provider that fails the test if it is ever called
pub struct ForbiddenLlmProvider;

#[async_trait]
impl LlmProvider for ForbiddenLlmProvider {
    fn name(&self) -> &str {
        "forbidden"
    }

    async fn generate(&self, model: &str, _prompt: &str) -> Result<String, LlmError> {
        panic!("LLM call attempted with model {} while offline", model);
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
        panic!("model listing attempted while offline");
    }
}
