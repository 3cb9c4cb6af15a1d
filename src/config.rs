//! Runtime configuration loaded from the environment.
//!
//! All settings are read once into a [`ReportConfig`] before any network
//! call. Validation is a pure function over the raw values so it can be
//! tested without touching process environment.

use std::env;
use std::time::Duration;

/// Placeholder token value shipped in `.env` templates.
const TOKEN_PLACEHOLDER: &str = "your_token_here";

/// Placeholder host fragment shipped in `.env` templates.
const URL_PLACEHOLDER: &str = "yourdomain";

/// Default Ollama generate endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";

/// Default model identifier sent to the inference endpoint.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Default bound on a single inference round trip, in seconds.
pub const DEFAULT_OLLAMA_TIMEOUT_SECS: u64 = 120;

/// Validated configuration for one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Bearer token for the tracker's REST API.
    pub jira_token: String,
    /// Base URL of the tracker instance (no trailing path).
    pub jira_url: String,
    /// JQL fragment appended to the generated project clause.
    pub jql_filter: String,
    /// Full URL of the Ollama generate endpoint.
    pub ollama_url: String,
    /// Model identifier sent with every generate request.
    pub ollama_model: String,
    /// Bound on a single inference round trip.
    pub ollama_timeout: Duration,
}

/// Raw, unvalidated settings as read from the environment.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    /// `JIRA_TOKEN`, if set.
    pub jira_token: Option<String>,
    /// `JIRA_URL`, if set.
    pub jira_url: Option<String>,
    /// `JIRA_JQL`, if set.
    pub jql_filter: Option<String>,
    /// `OLLAMA_URL`, if set.
    pub ollama_url: Option<String>,
    /// `OLLAMA_MODEL`, if set.
    pub ollama_model: Option<String>,
    /// `OLLAMA_TIMEOUT_SECS`, if set.
    pub ollama_timeout_secs: Option<String>,
}

impl RawConfig {
    /// Reads the raw settings from the process environment.
    ///
    /// A `.env` file in the working directory is honored when present.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            jira_token: env::var("JIRA_TOKEN").ok(),
            jira_url: env::var("JIRA_URL").ok(),
            jql_filter: env::var("JIRA_JQL").ok(),
            ollama_url: env::var("OLLAMA_URL").ok(),
            ollama_model: env::var("OLLAMA_MODEL").ok(),
            ollama_timeout_secs: env::var("OLLAMA_TIMEOUT_SECS").ok(),
        }
    }
}

impl ReportConfig {
    /// Loads and validates configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message when a required setting is missing or
    /// still holds its `.env` template placeholder.
    pub fn from_env() -> Result<Self, String> {
        validate_config(RawConfig::from_env())
    }
}

/// Validates raw settings into a [`ReportConfig`].
///
/// # Errors
///
/// Returns a descriptive message naming the first offending variable.
pub fn validate_config(raw: RawConfig) -> Result<ReportConfig, String> {
    let jira_token = match raw.jira_token {
        Some(token) if !token.is_empty() && token != TOKEN_PLACEHOLDER => token,
        _ => return Err("JIRA_TOKEN must be set in the environment or .env file".into()),
    };

    let jira_url = match raw.jira_url {
        Some(url) if !url.is_empty() && !url.contains(URL_PLACEHOLDER) => {
            url.trim_end_matches('/').to_string()
        }
        _ => {
            return Err(
                "JIRA_URL must be set to your actual tracker instance in the environment or .env file"
                    .into(),
            )
        }
    };

    let jql_filter = match raw.jql_filter {
        Some(filter) if !filter.is_empty() => filter,
        _ => return Err("JIRA_JQL must be set in the environment or .env file".into()),
    };

    let ollama_url = match raw.ollama_url {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_OLLAMA_URL.to_string(),
    };

    let ollama_model = match raw.ollama_model {
        Some(model) if !model.is_empty() => model,
        _ => DEFAULT_OLLAMA_MODEL.to_string(),
    };

    let ollama_timeout = match raw.ollama_timeout_secs {
        Some(secs) => {
            let secs: u64 = secs
                .parse()
                .map_err(|_| format!("OLLAMA_TIMEOUT_SECS must be a positive integer, got {secs:?}"))?;
            if secs == 0 {
                return Err("OLLAMA_TIMEOUT_SECS must be a positive integer".into());
            }
            Duration::from_secs(secs)
        }
        None => Duration::from_secs(DEFAULT_OLLAMA_TIMEOUT_SECS),
    };

    Ok(ReportConfig {
        jira_token,
        jira_url,
        jql_filter,
        ollama_url,
        ollama_model,
        ollama_timeout,
    })
}

/// Remediation hints printed alongside configuration failures.
#[must_use]
pub fn remediation_hints() -> &'static str {
    "Please ensure:\n\
     1. Your .env file is properly configured\n\
     2. Ollama is running locally with the configured model pulled\n\
     3. Your tracker credentials are correct"
}
