//! LLM client port for text generation.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`LlmClient`] to keep the trait dyn-compatible.
pub type GenerateFuture<'a> = Pin<
    Box<dyn Future<Output = Result<GenerateResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>,
>;

/// A request to generate text from a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The model identifier (e.g. `"llama3"`).
    pub model: String,
    /// The full prompt to send.
    pub prompt: String,
}

/// The response from a generate call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text, untrimmed.
    pub text: String,
}

/// Sends generate requests to a language model.
pub trait LlmClient: Send + Sync {
    /// Generates text for the given request in a single blocking round trip.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (network, non-success status,
    /// timeout, malformed body).
    fn generate(&self, request: &GenerateRequest) -> GenerateFuture<'_>;
}
