//! Normalization of raw tracker records into report rows.

use crate::ports::issues::RawIssue;

/// Placeholder for a missing issue type name.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Placeholder for a missing issue key.
pub const NO_KEY: &str = "No key";

/// Placeholder for a missing summary.
pub const NO_SUMMARY: &str = "No summary";

/// Placeholder for a missing status name.
pub const NO_STATUS: &str = "No status";

/// A flat issue record with every field guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedIssue {
    /// Issue type name, or [`UNKNOWN_TYPE`].
    pub issue_type: String,
    /// Issue key, or [`NO_KEY`].
    pub key: String,
    /// Summary text, or [`NO_SUMMARY`].
    pub summary: String,
    /// Status name, or [`NO_STATUS`].
    pub status: String,
}

/// Flattens a raw record, substituting placeholders for absent fields.
#[must_use]
pub fn normalize(raw: &RawIssue) -> NormalizedIssue {
    NormalizedIssue {
        issue_type: raw
            .fields
            .issuetype
            .as_ref()
            .and_then(|value| value.name.clone())
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        key: raw.key.clone().unwrap_or_else(|| NO_KEY.to_string()),
        summary: raw.fields.summary.clone().unwrap_or_else(|| NO_SUMMARY.to_string()),
        status: raw
            .fields
            .status
            .as_ref()
            .and_then(|value| value.name.clone())
            .unwrap_or_else(|| NO_STATUS.to_string()),
    }
}

/// Joins issues into the newline-separated text block fed to the summarizer.
///
/// The issue type is deliberately left out; the narrative prompt only needs
/// key, summary, and status.
#[must_use]
pub fn flatten(issues: &[NormalizedIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            format!(
                "Issue Key: {}, Summary: {}, Status: {}",
                issue.key, issue.summary, issue.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
