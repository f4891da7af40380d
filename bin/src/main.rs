#[macro_use]
extern crate log;

mod check;

use pbrt_core::app::options;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize `env_logger`.
    env_logger::init();

    let opts = options();
    match check::run(opts) {
        Ok(report) => {
            if !opts.quiet {
                println!("{}", report);
            }
            if report.passed() {
                ExitCode::SUCCESS
            } else {
                error!("Phase function '{}' failed validation.", opts.phase_type);
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
