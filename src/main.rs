//! ftpush CLI - deploy web projects over FTP/FTPS
//!
//! Usage: ftpush <COMMAND>
//!
//! Commands:
//!   init      Create the deployment profile
//!   push      Build and upload, then record the deployment
//!   history   List recorded deployments
//!   status    Show profile, repository and tool status
//!   rollback  Redeploy an earlier revision

mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use ftpush::presentation::Cli;

use crate::ui::context::UiContext;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match commands::dispatch(&ui, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {:?}", err);
            crate::ui::error::print_error(&err, ui.json);
            ExitCode::FAILURE
        }
    }
}
