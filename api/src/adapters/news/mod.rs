//! News adapter
//!
//! Web news search backed by the Google News RSS search endpoint.

pub mod google_news;

pub use google_news::GoogleNewsClient;
