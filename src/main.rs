//! fs-stc CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the gear,
//! and exit with status 1 on any failure, argument errors included.
//! For programmatic use, prefer the library API (`fs_stc::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version arrive here too and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            tracing::error!("Exiting...");
            ExitCode::FAILURE
        }
    }
}
