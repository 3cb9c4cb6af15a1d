//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default output filename for the generated report.
pub const DEFAULT_OUTPUT: &str = "JIRA_Summary_Report.docx";

/// Top-level CLI parser for `issuebrief`.
#[derive(Debug, Parser)]
#[command(name = "issuebrief", version, about = "Generate monthly progress reports from tracker issues")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch issues, summarize them, and write the report document.
    Report {
        /// Project identifier to report on (e.g. "PROJ").
        #[arg(long)]
        project: String,
        /// Path of the report document to write.
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Validate configuration without touching the tracker or the LLM.
    Check,
}
