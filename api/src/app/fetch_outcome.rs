//! Result of one upstream fetch
//!
//! Fetchers never fail outright: a broken upstream yields a `Degraded` outcome
//! with whatever articles could be salvaged (often none).

use crate::domain::entities::Article;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Every upstream call succeeded
    Complete(Vec<Article>),
    /// At least one upstream call failed
    Degraded {
        articles: Vec<Article>,
        reason: String,
    },
}

impl FetchOutcome {
    pub fn articles(&self) -> &[Article] {
        match self {
            FetchOutcome::Complete(articles) => articles,
            FetchOutcome::Degraded { articles, .. } => articles,
        }
    }

    pub fn into_articles(self) -> Vec<Article> {
        match self {
            FetchOutcome::Complete(articles) => articles,
            FetchOutcome::Degraded { articles, .. } => articles,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded_reason().is_some()
    }

    /// Why the fetch was incomplete, if it was
    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            FetchOutcome::Complete(_) => None,
            FetchOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}
