//! Subcommand implementations

use std::path::Path;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::{RetryFailedArgs, RunArgs, ValidateArgs};
use crate::config::{Config, Credentials};
use crate::core::csv::{CsvLoader, write_results_path};
use crate::core::pipeline::{Pipeline, RunContext};
use crate::core::providers::{OpenRouterClient, OpenRouterConfig};
use crate::core::types::{InputRow, RunReport};
use crate::utils::error::{LinkCheckError, Result};

/// Rows shown by `validate`
const PREVIEW_ROWS: usize = 5;

pub async fn run(config: Config, args: RunArgs) -> Result<()> {
    let credentials = Credentials::from_env()?;
    let rows = CsvLoader::new().load_path(&args.input)?;
    info!(input = %args.input.display(), rows = rows.len(), "Input loaded");

    let ctx = RunContext::new(config);
    let pipeline = Pipeline::from_credentials(ctx.config(), &credentials)?;

    let listener = cancel_on_ctrl_c(&ctx);
    let report = pipeline.run(&rows, &ctx).await;
    listener.abort();

    finish(&report, &args.output)
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let rows = CsvLoader::new().load_path(&args.input)?;
    println!("{}", preview(&rows));
    Ok(())
}

pub async fn retry_failed(config: Config, args: RetryFailedArgs) -> Result<()> {
    let credentials = Credentials::from_env()?;
    let previous = CsvLoader::new().load_results_path(&args.input)?;
    let output = args.output.unwrap_or_else(|| args.input.clone());

    let ctx = RunContext::new(config);
    let pipeline = Pipeline::from_credentials(ctx.config(), &credentials)?;

    let listener = cancel_on_ctrl_c(&ctx);
    let report = pipeline.reprocess(previous, &ctx).await;
    listener.abort();

    finish(&report, &output)
}

pub async fn check(config: Config) -> Result<()> {
    println!("{}", crate::build_info());

    let credentials = Credentials::from_env()?;
    println!("Credentials: OK");

    let client = OpenRouterClient::new(OpenRouterConfig::from_settings(
        &config.classification,
        credentials.openrouter_api_key(),
    ))?;
    if client.test_connection().await {
        println!("OpenRouter: OK ({})", client.config().model);
        Ok(())
    } else {
        Err(LinkCheckError::Network(format!(
            "OpenRouter did not answer the connection check (model {})",
            client.config().model
        )))
    }
}

fn finish(report: &RunReport, output: &Path) -> Result<()> {
    write_results_path(output, &report.rows)?;
    println!("{}", report.summary);
    println!("Results saved to {}", output.display());
    if report.summary.cancelled {
        warn!("Run was cancelled; unprocessed rows can be re-run with `retry-failed`");
    }
    Ok(())
}

/// Cancel the run on the first Ctrl-C
fn cancel_on_ctrl_c(ctx: &RunContext) -> JoinHandle<()> {
    let handle = ctx.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current step");
            handle.cancel();
        }
    })
}

fn preview(rows: &[InputRow]) -> String {
    let mut out = format!("Input is valid: {} rows", rows.len());
    for (index, row) in rows.iter().take(PREVIEW_ROWS).enumerate() {
        out.push_str(&format!("\n  {}. {} -> {}", index + 1, row.business_name, row.url));
    }
    if rows.len() > PREVIEW_ROWS {
        out.push_str(&format!("\n  ... {} more", rows.len() - PREVIEW_ROWS));
    }
    out
}
