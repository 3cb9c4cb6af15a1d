//! Live adapter for the `IssueSearch` port against Jira's REST search API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::ports::issues::{IssueSearch, RawIssue, SearchFuture};

/// Path of the search endpoint relative to the instance base URL.
const SEARCH_PATH: &str = "/rest/api/2/search";

/// Fields requested from the search endpoint. Wider than the report needs;
/// the extra members are ignored on deserialization.
const FIELD_PROJECTION: &str =
    "issuetype,key,summary,status,project,priority,assignee,reporter,description";

/// Bound on a single search round trip.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Live search client that calls a Jira instance with bearer-token auth.
pub struct JiraSearchClient {
    client: Client,
    base_url: String,
    token: String,
}

impl JiraSearchClient {
    /// Creates a client for the given instance base URL and token.
    #[must_use]
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.base_url)
    }
}

/// Successful body of the search endpoint.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<RawIssue>,
}

impl IssueSearch for JiraSearchClient {
    fn search(&self, jql: &str) -> SearchFuture<'_> {
        let jql = jql.to_string();

        Box::pin(async move {
            let response = self
                .client
                .get(self.search_url())
                .header("Authorization", format!("Bearer {}", self.token))
                .header("Accept", "application/json")
                .query(&[("jql", jql.as_str()), ("fields", FIELD_PROJECTION)])
                .timeout(SEARCH_TIMEOUT)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("tracker request failed: {e}").into()
                })?;

            let status = response.status();
            let body =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read tracker response: {e}").into()
                })?;

            if !status.is_success() {
                return Err(format!("tracker API error ({}): {body}", status.as_u16()).into());
            }

            let parsed: SearchResponse = serde_json::from_str(&body).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to parse tracker response: {e}").into()
                },
            )?;

            Ok(parsed.issues)
        })
    }
}
