//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod arxiv;
pub mod http;
pub mod llm;
pub mod news;

pub use arxiv::ArxivClient;
pub use http::build_http_client;
pub use llm::{GeminiClient, OpenAiCompatClient};
pub use news::GoogleNewsClient;
