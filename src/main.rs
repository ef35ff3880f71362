//! Cow - line-command task tracker

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = cow_tasks::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
