//! Command-line interface

pub mod commands;

use crate::config::Config;
use crate::utils::error::Result;
use crate::utils::logging::init_logging;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

/// Default results file for `run`
pub const DEFAULT_OUTPUT: &str = "link_checker_results.csv";

#[derive(Debug, Parser)]
#[command(name = "link-checker", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "LINK_CHECKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `link_checker=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check every row of an input file and write the results
    Run(RunArgs),
    /// Validate an input file without contacting any service
    Validate(ValidateArgs),
    /// Re-check rows of a results file that were not working or errored
    RetryFailed(RetryFailedArgs),
    /// Verify credentials and that the classification service answers
    Check,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// CSV with `business_name` and `URL` columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Results file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(short, long)]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct RetryFailedArgs {
    /// Results file from a previous run
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the merged results (defaults to overwriting the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load `.env`, configuration and logging, then run the chosen command
pub async fn execute(cli: Cli) -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let mut config = Config::load(cli.config.as_deref()).await?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.log_json {
        config.logging.json = true;
    }
    init_logging(&config.logging, cli.log_level.as_deref())?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) => debug!(error = %e, "No .env file loaded"),
    }

    let result = match cli.command {
        Command::Run(args) => commands::run(config, args).await,
        Command::Validate(args) => commands::validate(args),
        Command::RetryFailed(args) => commands::retry_failed(config, args).await,
        Command::Check => commands::check(config).await,
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
