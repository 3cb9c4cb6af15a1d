//! Scripted adapter for the `LlmClient` port.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::llm::{GenerateFuture, GenerateRequest, GenerateResponse, LlmClient};

/// Serves queued generations and records every request.
///
/// Clones share the queue and the request log, so a test can keep a handle
/// after boxing the adapter into a context.
#[derive(Default, Clone)]
pub struct ScriptedLlmClient {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedLlmClient {
    /// Creates a scripted client with an empty response queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next generation result.
    pub fn push_response(&self, response: Result<String, String>) {
        self.responses.lock().expect("response queue lock poisoned").push_back(response);
    }

    /// Returns the requests seen so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("request log lock poisoned").clone()
    }
}

impl LlmClient for ScriptedLlmClient {
    fn generate(&self, request: &GenerateRequest) -> GenerateFuture<'_> {
        self.requests.lock().expect("request log lock poisoned").push(request.clone());
        let next = self.responses.lock().expect("response queue lock poisoned").pop_front();

        Box::pin(async move {
            match next {
                Some(Ok(text)) => Ok(GenerateResponse { text }),
                Some(Err(msg)) => Err(msg.into()),
                None => Err("no scripted generation queued".into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_generation_and_records_request() {
        let llm = ScriptedLlmClient::new();
        llm.push_response(Ok("A quiet month.".into()));

        let request = GenerateRequest { model: "llama3".into(), prompt: "issues".into() };
        let response = llm.generate(&request).await.unwrap();

        assert_eq!(response.text, "A quiet month.");
        let seen = llm.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "llama3");
    }

    #[tokio::test]
    async fn surfaces_scripted_errors() {
        let llm = ScriptedLlmClient::new();
        llm.push_response(Err("connection refused".into()));

        let request = GenerateRequest { model: "llama3".into(), prompt: "issues".into() };
        let err = llm.generate(&request).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
