//! Command dispatch and handlers.

pub mod check;
pub mod report;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Report { project, output } => report::run(project, output),
        Command::Check => check::run(),
    }
}
