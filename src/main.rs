//! tabconv CLI entrypoint.
//!
//! Parses arguments, installs logging and hands over to the `cli` runner.
//! Configuration errors end the process with a non-zero status; failures of
//! individual files are reported on stdout and do not stop the run.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::init_logging(args.verbose);

    match cli::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
