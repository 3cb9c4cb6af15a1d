//! `issuebrief check` command: validate configuration without any I/O.

use crate::config::{self, ReportConfig};

/// Execute the `check` command.
///
/// Loads and validates configuration, then reports what is resolved. No
/// network call is made; the token is never printed.
///
/// # Errors
///
/// Returns an error string, with remediation hints appended, when a
/// required setting is missing or placeholder-valued.
pub fn run() -> Result<(), String> {
    match ReportConfig::from_env() {
        Ok(config) => {
            println!("Configuration OK");
            println!("  tracker:           {}", config.jira_url);
            println!("  query filter:      {}", config.jql_filter);
            println!("  inference:         {} via {}", config.ollama_model, config.ollama_url);
            println!("  inference timeout: {}s", config.ollama_timeout.as_secs());
            Ok(())
        }
        Err(err) => Err(format!("{err}\n\n{}", config::remediation_hints())),
    }
}
