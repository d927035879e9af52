//! CLI entry point for pizza-split.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use cli::{Cli, Commands, GlobalArgs};
use pizza_split::config::Config;
use pizza_split::error::BillError;
use pizza_split::logging::init_logging;
use pizza_split::output::Output;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let output = Output::new(cli.global.output_mode());

    match run(cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<BillError>() {
                Some(bill_error) => {
                    tracing::debug!(kind = ?bill_error.kind(), "session ended with an error");
                    output.failure(bill_error);
                }
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let global = cli.global;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd::run::cmd_run(&load_config(&global)?, output),
        Commands::Split {
            price,
            pieces,
            eaters,
        } => cmd::split::cmd_split(&price, &pieces, &eaters, &load_config(&global)?, output),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
        Commands::Version => cmd::util::cmd_version(global.verbose > 0),
    }
}

fn load_config(global: &GlobalArgs) -> Result<Config> {
    Config::load_or_default(global.config.as_deref())?
        .with_overrides(global.rounding, global.sentinel.clone())
}
