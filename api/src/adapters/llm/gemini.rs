//! Generative-AI REST client
//!
//! Calls `models/{model}:generateContent` directly over HTTP and lists models
//! through `models` for discovery.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::status_error;
use crate::adapters::http::error_body;
use crate::domain::ports::{LlmProvider, ModelInfo};
use crate::error::LlmError;

const API_KEY_HEADER: &str = "x-goog-api-key";
const GENERATE_METHOD: &str = "generateContent";

pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn model_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.base_url,
            model.trim_start_matches("models/"),
            GENERATE_METHOD
        )
    }

    /// Credential travels in a header, never in the URL
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(API_KEY_HEADER, &self.api_key)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ListedModel>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedModel {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

/// Extract the first candidate's text from a `generateContent` body
pub fn parse_generate_response(body: &str) -> Result<String, LlmError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Deserialization(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        Err(LlmError::EmptyResponse)
    } else {
        Ok(text.to_string())
    }
}

/// Parse a `models` listing body
pub fn parse_model_list(body: &str) -> Result<Vec<ModelInfo>, LlmError> {
    let list: ModelList =
        serde_json::from_str(body).map_err(|e| LlmError::Deserialization(e.to_string()))?;

    Ok(list
        .models
        .into_iter()
        .map(|m| ModelInfo {
            supports_generation: m
                .supported_generation_methods
                .iter()
                .any(|method| method == GENERATE_METHOD),
            id: m.name.trim_start_matches("models/").to_string(),
        })
        .collect())
}

#[async_trait]
impl LlmProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        debug!("gemini generateContent with {}", model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .authorized(self.http.post(self.model_url(model)))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, model, error_body(response).await));
        }

        let body = response.text().await?;
        parse_generate_response(&body)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
        let response = self
            .authorized(self.http.get(format!("{}/models", self.base_url)))
            .query(&[("pageSize", "1000")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, "models", error_body(response).await));
        }

        let body = response.text().await?;
        parse_model_list(&body)
    }
}
