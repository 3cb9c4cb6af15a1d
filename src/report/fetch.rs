//! Issue fetch stage.

use crate::config::ReportConfig;
use crate::jql;
use crate::ports::issues::{IssueSearch, RawIssue};

/// Fetches the first page of issues matching the project and the configured
/// filter.
///
/// Every failure mode (network, non-success status, malformed body) degrades
/// to an empty vector after a console message; callers cannot distinguish a
/// failed fetch from a query with no matches.
pub async fn fetch_issues(
    search: &dyn IssueSearch,
    config: &ReportConfig,
    project: &str,
) -> Vec<RawIssue> {
    let query = jql::compose(project, &config.jql_filter);
    println!("Fetching issues with query: {query}");

    match search.search(&query).await {
        Ok(issues) => {
            println!("Successfully fetched {} issues from the tracker", issues.len());
            issues
        }
        Err(err) => {
            println!("Error fetching issues from the tracker: {err}");
            Vec::new()
        }
    }
}
