//! Unified error types for the NeuroSync API
//!
//! This module defines error types for each layer:
//! - `SourceError`: paper/news upstream client errors
//! - `LlmError`: LLM provider errors (one per failed candidate in the synthesis chain)
//! - `AppError`: HTTP-facing errors
//!
//! The feed path never surfaces `SourceError` or `LlmError` to clients; services
//! fold them into degraded outcomes instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Paper / news upstream errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<quick_xml::DeError> for SourceError {
    fn from(err: quick_xml::DeError) -> Self {
        SourceError::Parse(format!("XML: {}", err))
    }
}

impl From<rss::Error> for SourceError {
    fn from(err: rss::Error) -> Self {
        SourceError::Parse(format!("RSS: {}", err))
    }
}

/// LLM provider errors
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Quota exhausted: {0}")]
    Quota(String),

    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Operation not supported by provider: {0}")]
    Unsupported(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
