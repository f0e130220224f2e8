//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod feed;
pub mod status;

pub use feed::get_feed;
pub use status::{not_found, status};
