//! Feed handlers
//!
//! `GET /feed` always answers 200 with a best-effort `FeedResponse`; upstream
//! failures only show up as fewer articles or a fallback synthesis.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::domain::entities::FeedResponse;
use crate::AppState;

/// GET /feed
pub async fn get_feed(State(state): State<AppState>) -> Json<Arc<FeedResponse>> {
    Json(state.feed_service.get_feed().await)
}
