//! Narrative summary stage.

use crate::ports::llm::{GenerateRequest, LlmClient};

/// Instruction prepended to the flattened issue text.
const INSTRUCTION: &str = "You are a project manager assistant. Given a list of issues or tasks \
     with the fields: Issue Type, Issue Key, Summary, and Status, create a concise and \
     professional high level summary of planned or ongoing activities for the current or \
     upcoming month. Do not list individual issues. Give a brief overview. \
     Here is the list of issues: ";

/// Builds the full prompt for the summarizer.
#[must_use]
pub fn build_prompt(flattened: &str) -> String {
    format!("{INSTRUCTION}{flattened}")
}

/// Produces the narrative summary for the flattened issue text.
///
/// Never fails past this component: every error (non-success status,
/// network failure, timeout, empty model output) becomes a placeholder
/// string that is rendered into the report in place of a real summary.
pub async fn summarize(llm: &dyn LlmClient, model: &str, flattened: &str) -> String {
    let request = GenerateRequest { model: model.to_string(), prompt: build_prompt(flattened) };

    println!("Generating summary with model {model}...");
    match llm.generate(&request).await {
        Ok(response) => {
            let text = response.text.trim().to_string();
            if text.is_empty() {
                "Error generating summary: the model returned an empty response".to_string()
            } else {
                text
            }
        }
        Err(err) => {
            println!("Error generating summary: {err}");
            format!("Error generating summary: {err}")
        }
    }
}
