//! Domain entities
//!
//! Pure domain models representing the content served by the feed.

pub mod article;
pub mod feed;

pub use article::{collapse_whitespace, truncate_summary, Article, ArticleKind, UNKNOWN_AUTHOR};
pub use feed::FeedResponse;
