//! Issue tracker search port.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`IssueSearch`] to keep the trait dyn-compatible.
pub type SearchFuture<'a> = Pin<
    Box<dyn Future<Output = Result<Vec<RawIssue>, Box<dyn Error + Send + Sync>>> + Send + 'a>,
>;

/// A raw issue record as returned by the tracker's search endpoint.
///
/// Both the key and every projected field may be absent; normalization
/// substitutes placeholders downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssue {
    /// The unique issue key (e.g. `"PROJ-1"`).
    pub key: Option<String>,
    /// The projected field block.
    #[serde(default)]
    pub fields: RawFields,
}

/// The `fields` block of a raw issue.
///
/// The search projection requests more fields than the report consumes;
/// unmodeled members are ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFields {
    /// Issue type descriptor.
    pub issuetype: Option<NamedValue>,
    /// One-line summary text.
    pub summary: Option<String>,
    /// Workflow status descriptor.
    pub status: Option<NamedValue>,
}

/// A nested tracker object of which only the display name matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedValue {
    /// Human-readable name.
    pub name: Option<String>,
}

/// Searches the external issue tracker.
///
/// Abstracting the tracker allows deterministic pipeline tests without a
/// live instance.
pub trait IssueSearch: Send + Sync {
    /// Runs a JQL search and returns the first page of matching issues.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// malformed response body.
    fn search(&self, jql: &str) -> SearchFuture<'_>;
}
