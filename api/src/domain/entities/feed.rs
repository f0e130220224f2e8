//! Feed response entity
//!
//! The cacheable unit served by `GET /feed`.

use serde::{Deserialize, Serialize};

use super::article::Article;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    /// LLM-generated or fallback commentary
    pub synthesis: String,
    /// RFC 3339 time the response was computed
    pub timestamp: String,
    /// Papers first, then news
    pub articles: Vec<Article>,
}
