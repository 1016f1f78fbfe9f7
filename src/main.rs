//! Flash - a small assistant that keeps track of your tasks

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = flash::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
