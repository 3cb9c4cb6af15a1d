//! End-to-end pipeline scenarios against scripted adapters.

use std::path::Path;

use issuebrief::adapters::scripted::{InMemoryFileSystem, ScriptedIssueSearch, ScriptedLlmClient};
use issuebrief::commands::report::run_with_context;
use issuebrief::config::{validate_config, RawConfig, ReportConfig};
use issuebrief::context::ServiceContext;
use issuebrief::ports::issues::RawIssue;

fn test_config() -> ReportConfig {
    validate_config(RawConfig {
        jira_token: Some("token".into()),
        jira_url: Some("https://tracker.example.com".into()),
        jql_filter: Some("AND updated >= -30d".into()),
        ..RawConfig::default()
    })
    .unwrap()
}

fn one_issue() -> RawIssue {
    serde_json::from_value(serde_json::json!({
        "key": "PROJ-1",
        "fields": {
            "issuetype": {"name": "Bug"},
            "summary": "Fix crash",
            "status": {"name": "Open"}
        }
    }))
    .unwrap()
}

fn context(
    search: &ScriptedIssueSearch,
    llm: &ScriptedLlmClient,
    fs: &InMemoryFileSystem,
) -> ServiceContext {
    ServiceContext {
        issues: Box::new(search.clone()),
        llm: Box::new(llm.clone()),
        fs: Box::new(fs.clone()),
    }
}

#[tokio::test]
async fn scenario_empty_fetch_produces_no_report() {
    let search = ScriptedIssueSearch::new();
    search.push_response(Ok(Vec::new()));
    let llm = ScriptedLlmClient::new();
    let fs = InMemoryFileSystem::new();

    let ctx = context(&search, &llm, &fs);
    run_with_context(&ctx, &test_config(), "PROJ", Path::new("JIRA_Summary_Report.docx")).await;

    assert_eq!(fs.file_count(), 0);
    assert!(llm.requests().is_empty());
}

#[tokio::test]
async fn scenario_fetch_failure_produces_no_report() {
    let search = ScriptedIssueSearch::new();
    search.push_response(Err("tracker API error (500): boom".into()));
    let llm = ScriptedLlmClient::new();
    let fs = InMemoryFileSystem::new();

    let ctx = context(&search, &llm, &fs);
    run_with_context(&ctx, &test_config(), "PROJ", Path::new("JIRA_Summary_Report.docx")).await;

    assert_eq!(fs.file_count(), 0);
    assert!(llm.requests().is_empty());
}

#[tokio::test]
async fn scenario_one_issue_produces_a_report() {
    let search = ScriptedIssueSearch::new();
    search.push_response(Ok(vec![one_issue()]));
    let llm = ScriptedLlmClient::new();
    llm.push_response(Ok("All systems stable.".into()));
    let fs = InMemoryFileSystem::new();

    let ctx = context(&search, &llm, &fs);
    let output = Path::new("JIRA_Summary_Report.docx");
    run_with_context(&ctx, &test_config(), "PROJ", output).await;

    // The composed query carries the escaped project clause and the filter.
    assert_eq!(search.queries(), vec!["project = 'PROJ' AND updated >= -30d"]);

    // The summarizer saw the flattened issue text (type omitted).
    let requests = llm.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, "llama3");
    assert!(requests[0].prompt.contains("Issue Key: PROJ-1, Summary: Fix crash, Status: Open"));

    // A zip-packaged document was written to the requested path.
    let bytes = fs.contents(output).expect("report file written");
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[tokio::test]
async fn scenario_summarizer_failure_still_produces_a_report() {
    let search = ScriptedIssueSearch::new();
    search.push_response(Ok(vec![one_issue()]));
    let llm = ScriptedLlmClient::new();
    llm.push_response(Err("inference API error (500): overloaded".into()));
    let fs = InMemoryFileSystem::new();

    let ctx = context(&search, &llm, &fs);
    let output = Path::new("JIRA_Summary_Report.docx");
    run_with_context(&ctx, &test_config(), "PROJ", output).await;

    // The error is rendered into the document instead of aborting the run.
    assert!(fs.contents(output).is_some());
}

#[tokio::test]
async fn identical_runs_write_identical_bytes() {
    let search = ScriptedIssueSearch::new();
    search.push_response(Ok(vec![one_issue()]));
    search.push_response(Ok(vec![one_issue()]));
    let llm = ScriptedLlmClient::new();
    llm.push_response(Ok("All systems stable.".into()));
    llm.push_response(Ok("All systems stable.".into()));
    let fs = InMemoryFileSystem::new();

    let ctx = context(&search, &llm, &fs);
    let first = Path::new("first.docx");
    let second = Path::new("second.docx");
    run_with_context(&ctx, &test_config(), "PROJ", first).await;
    run_with_context(&ctx, &test_config(), "PROJ", second).await;

    assert_eq!(fs.contents(first).unwrap(), fs.contents(second).unwrap());
}

#[tokio::test]
async fn rerun_to_the_same_path_overwrites_the_file() {
    let search = ScriptedIssueSearch::new();
    search.push_response(Ok(vec![one_issue()]));
    search.push_response(Ok(Vec::new()));
    search.push_response(Ok(vec![one_issue()]));
    let llm = ScriptedLlmClient::new();
    llm.push_response(Ok("First month.".into()));
    llm.push_response(Ok("Second month.".into()));
    let fs = InMemoryFileSystem::new();

    let ctx = context(&search, &llm, &fs);
    let output = Path::new("JIRA_Summary_Report.docx");

    run_with_context(&ctx, &test_config(), "PROJ", output).await;
    let first = fs.contents(output).unwrap();

    // An empty fetch leaves the previous file untouched.
    run_with_context(&ctx, &test_config(), "PROJ", output).await;
    assert_eq!(fs.contents(output).unwrap(), first);

    run_with_context(&ctx, &test_config(), "PROJ", output).await;
    let third = fs.contents(output).unwrap();
    assert_ne!(first, third);
    assert_eq!(fs.file_count(), 1);
}
