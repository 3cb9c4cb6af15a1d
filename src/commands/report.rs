//! `issuebrief report` command: the sequential report pipeline.

use std::path::Path;

use crate::config::{self, ReportConfig};
use crate::context::ServiceContext;
use crate::report::{document, docx, fetch, normalize, summarize};

/// Execute the `report` command against live adapters.
///
/// # Errors
///
/// Returns an error string when configuration is missing or invalid, or the
/// async runtime cannot start. Fetch, summarization, and rendering failures
/// are recovered inside the pipeline and do not surface here.
pub fn run(project: &str, output: &Path) -> Result<(), String> {
    let config = ReportConfig::from_env()
        .map_err(|err| format!("{err}\n\n{}", config::remediation_hints()))?;
    let ctx = ServiceContext::live(&config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    runtime.block_on(run_with_context(&ctx, &config, project, output));
    Ok(())
}

/// Runs the pipeline against the given context: fetch, normalize, flatten,
/// summarize, assemble, render, persist.
///
/// An empty fetch result (no matches, or any fetch failure) ends the run
/// early with a console line and no report file. Rendering and persistence
/// failures are logged, never propagated.
pub async fn run_with_context(
    ctx: &ServiceContext,
    config: &ReportConfig,
    project: &str,
    output: &Path,
) {
    println!("Starting tracker report run for {project}...");

    let raw = fetch::fetch_issues(ctx.issues.as_ref(), config, project).await;
    if raw.is_empty() {
        println!("No issues found or error fetching issues. Exiting.");
        return;
    }

    let mut issues = Vec::with_capacity(raw.len());
    for (index, raw_issue) in raw.iter().enumerate() {
        let issue = normalize::normalize(raw_issue);
        println!("Processing issue {}/{}: {}", index + 1, raw.len(), issue.key);
        issues.push(issue);
    }

    let flattened = normalize::flatten(&issues);
    println!("{flattened}");

    let summary = summarize::summarize(ctx.llm.as_ref(), &config.ollama_model, &flattened).await;
    println!("Summary:\n{summary}");

    println!("Generating report document: {}", output.display());
    let report = document::assemble(&issues, &summary, project);
    match docx::render(&report) {
        Ok(bytes) => match ctx.fs.write_bytes(output, &bytes) {
            Ok(()) => println!("Document saved successfully as {}", output.display()),
            Err(err) => println!("Error saving report document: {err}"),
        },
        Err(err) => println!("Error generating report document: {err}"),
    }

    println!("Report run complete: {} issues.", issues.len());
}
