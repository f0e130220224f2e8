//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod llm;
pub mod news;
pub mod papers;

pub use llm::{LlmProvider, ModelInfo};
pub use news::{NewsSource, RawNewsItem};
pub use papers::{PaperSource, RawPaper};
