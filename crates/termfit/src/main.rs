#![forbid(unsafe_code)]

//! `termfit` — measure and fit text for fixed-width terminal cells.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run(std::env::args().skip(1)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(outcome) => outcome.report(),
    }
}
