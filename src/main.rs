use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod commands;
mod domain;
mod services;
mod validator;

use cli::Cli;
use services::logging::init_logging;
use services::output::{error_code, is_broken_pipe, print_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::handle_runtime_commands(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => {
            debug!("stdout closed early, stopping output");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(code = error_code(&err), "command failed");
            print_error(cli.json, &err);
            ExitCode::FAILURE
        }
    }
}
