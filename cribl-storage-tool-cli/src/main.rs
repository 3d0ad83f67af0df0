mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands, IamCommands, S3Commands};
use cribl_storage_tool_access::StorageToolError;
use log::LevelFilter;
use std::process::ExitCode;

/// Exit code for usage errors (bad flags, bad bucket file, malformed ARN)
const EXIT_INVALID_INPUT: u8 = 2;

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };
    // RUST_LOG, when set, overrides the flag-derived level.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Iam {
            command: IamCommands::Setup(args),
        } => commands::setup::run(args).await,
        Commands::S3 {
            command: S3Commands::List(args),
        } => commands::list::run(args).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            let invalid_input = e
                .downcast_ref::<StorageToolError>()
                .is_some_and(StorageToolError::is_invalid_input);
            if invalid_input {
                ExitCode::from(EXIT_INVALID_INPUT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
