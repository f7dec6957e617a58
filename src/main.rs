//! Binary entrypoint for the `construct-lens` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match construct_lens::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
