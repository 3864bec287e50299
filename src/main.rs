#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! acctclass — render the account classification reference table as markdown.

mod cli;
mod commands;
mod ledger;
mod types;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

/// Environment variable that overrides the log filter (e.g. `ACCTCLASS_LOG=debug`).
const LOG_ENV: &str = "ACCTCLASS_LOG";

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr and are off unless asked for.
    let default_level = if cli.debug { "debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let ctx = OutputCtx::new(
        cli.output,
        cli.json,
        cli.no_footer,
        &cli.source,
        cli.debug,
    );

    match commands::dispatch(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_report_error(&err);
            write_error(&error_output, ctx.format);
            std::process::exit(err.exit_code());
        }
    }
}
