//! LLM adapters
//!
//! Raw HTTP clients for the generative-AI REST endpoint and for
//! OpenAI-compatible chat completion servers.

pub mod gemini;
pub mod openai;

pub use gemini::GeminiClient;
pub use openai::OpenAiCompatClient;

use reqwest::StatusCode;

use crate::error::LlmError;

/// Map a non-success provider status onto the error taxonomy
pub(crate) fn status_error(status: StatusCode, model: &str, message: String) -> LlmError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => LlmError::Quota(message),
        StatusCode::NOT_FOUND => LlmError::UnsupportedModel(model.to_string()),
        _ => LlmError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
