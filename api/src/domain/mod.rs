//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models (articles, feed responses)
//! - `ports`: Trait definitions for the upstream paper, news and LLM services

pub mod entities;
pub mod ports;
