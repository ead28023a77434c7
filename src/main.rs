//! link-checker command-line entry point

use clap::Parser;
use link_checker::cli::{self, Cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so multi-line messages stay readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
