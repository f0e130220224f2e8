//! Liveness and fallback handlers

use axum::{http::Uri, Json};
use serde::Serialize;

use crate::error::AppError;

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
    system: &'static str,
}

/// GET /
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        system: "NeuroSync Cortex",
    })
}

/// Any unrouted path
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
