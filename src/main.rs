//! Binary entrypoint for the `commons` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match commons::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
