//! Scripted adapter for the `IssueSearch` port.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::issues::{IssueSearch, RawIssue, SearchFuture};

/// Serves queued search results and records every query.
///
/// Clones share the queue and the query log, so a test can keep a handle
/// after boxing the adapter into a context.
#[derive(Default, Clone)]
pub struct ScriptedIssueSearch {
    responses: Arc<Mutex<VecDeque<Result<Vec<RawIssue>, String>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl ScriptedIssueSearch {
    /// Creates a scripted search with an empty response queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next search result.
    pub fn push_response(&self, response: Result<Vec<RawIssue>, String>) {
        self.responses.lock().expect("response queue lock poisoned").push_back(response);
    }

    /// Returns the JQL strings seen so far, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("query log lock poisoned").clone()
    }
}

impl IssueSearch for ScriptedIssueSearch {
    fn search(&self, jql: &str) -> SearchFuture<'_> {
        self.queries.lock().expect("query log lock poisoned").push(jql.to_string());
        let next = self.responses.lock().expect("response queue lock poisoned").pop_front();

        Box::pin(async move {
            match next {
                Some(Ok(issues)) => Ok(issues),
                Some(Err(msg)) => Err(msg.into()),
                None => Err("no scripted search response queued".into()),
            }
        })
    }
}
