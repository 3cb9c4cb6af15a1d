//! Binary entrypoint for the `issuebrief` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match issuebrief::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
