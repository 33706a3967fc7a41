//! Binary entrypoint for the `nuv` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // NUV_RECORD / NUV_REPLAY / NUV_LOG are read in nuv::run.
    match nuv::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
