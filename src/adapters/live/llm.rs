//! Live adapter for the `LlmClient` port using Ollama's generate API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::llm::{GenerateFuture, GenerateRequest, GenerateResponse, LlmClient};

/// Live LLM client that calls a local Ollama instance.
pub struct OllamaClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Creates a client for the given generate endpoint URL.
    ///
    /// Every call is bounded by `timeout`; a hung endpoint surfaces as a
    /// request error rather than stalling the run.
    #[must_use]
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self { client: Client::new(), url: url.to_string(), timeout }
    }
}

/// Request body sent to the generate endpoint.
#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Successful body of the generate endpoint (non-streamed).
#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

/// Error body of the generate endpoint.
#[derive(Deserialize)]
struct OllamaError {
    error: String,
}

impl LlmClient for OllamaClient {
    fn generate(&self, request: &GenerateRequest) -> GenerateFuture<'_> {
        let model = request.model.clone();
        let prompt = request.prompt.clone();

        Box::pin(async move {
            let body = OllamaRequest { model: &model, prompt: &prompt, stream: false };

            let response = self
                .client
                .post(&self.url)
                .header("Content-Type", "application/json")
                .json(&body)
                .timeout(self.timeout)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("inference request failed: {e}").into()
                })?;

            let status = response.status();
            let text =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read inference response: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<OllamaError>(&text)
                    .map(|e| e.error)
                    .unwrap_or(text);
                return Err(format!("inference API error ({}): {msg}", status.as_u16()).into());
            }

            let parsed: OllamaResponse = serde_json::from_str(&text).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to parse inference response: {e}").into()
                },
            )?;

            Ok(GenerateResponse { text: parsed.response })
        })
    }
}
