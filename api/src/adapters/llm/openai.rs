//! OpenAI-compatible chat completions client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::status_error;
use crate::adapters::http::error_body;
use crate::domain::ports::LlmProvider;
use crate::error::LlmError;

pub struct OpenAiCompatClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiCompatClient {
    pub fn new(http: Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extract the first choice's message from a chat completion body
pub fn parse_chat_response(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Deserialization(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(LlmError::EmptyResponse)
}

#[async_trait]
impl LlmProvider for OpenAiCompatClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        debug!("chat completion with {}", model);

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, model, error_body(response).await));
        }

        let body = response.text().await?;
        parse_chat_response(&body)
    }
}
