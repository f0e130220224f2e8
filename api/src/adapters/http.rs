//! Shared HTTP client construction

use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = concat!("NeuroSync/", env!("CARGO_PKG_VERSION"), " (BCI research feed)");

/// Build the HTTP client shared by every upstream adapter
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Read an error body for logging, capped so huge HTML error pages stay readable
pub async fn error_body(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    text.chars().take(500).collect()
}
