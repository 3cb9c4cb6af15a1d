//! Service context bundling all port trait objects.

use crate::adapters::live::{JiraSearchClient, LiveFileSystem, OllamaClient};
use crate::config::ReportConfig;
use crate::ports::filesystem::FileSystem;
use crate::ports::issues::IssueSearch;
use crate::ports::llm::LlmClient;

/// Bundles the port trait objects the report pipeline runs against.
///
/// The live constructor wires real adapters from configuration; tests build
/// the struct directly with scripted adapters.
pub struct ServiceContext {
    /// Issue tracker search.
    pub issues: Box<dyn IssueSearch>,
    /// LLM client for the narrative summary.
    pub llm: Box<dyn LlmClient>,
    /// Filesystem for persisting the report artifact.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context with real adapters wired from `config`.
    #[must_use]
    pub fn live(config: &ReportConfig) -> Self {
        Self {
            issues: Box::new(JiraSearchClient::new(&config.jira_url, &config.jira_token)),
            llm: Box::new(OllamaClient::new(&config.ollama_url, config.ollama_timeout)),
            fs: Box::new(LiveFileSystem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceContext;
    use crate::adapters::scripted::{InMemoryFileSystem, ScriptedIssueSearch, ScriptedLlmClient};

    #[tokio::test]
    async fn context_accepts_scripted_adapters() {
        let search = ScriptedIssueSearch::new();
        search.push_response(Ok(Vec::new()));

        let ctx = ServiceContext {
            issues: Box::new(search),
            llm: Box::new(ScriptedLlmClient::new()),
            fs: Box::new(InMemoryFileSystem::new()),
        };

        let issues = ctx.issues.search("project = 'A'").await.unwrap();
        assert!(issues.is_empty());
    }
}
