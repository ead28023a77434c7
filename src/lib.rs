//! # link-checker
//!
//! Checks whether the websites listed for a set of businesses actually
//! belong to those businesses.
//!
//! ## Features
//!
//! - **CSV in, CSV out**: reads `business_name,URL` rows and writes one result row per input row
//! - **Batched retrieval**: page text comes from the Exa contents API, 10 URLs per group with a pause between groups
//! - **LLM classification**: an OpenRouter model answers VALID or INVALID for every reachable page
//! - **Run summary**: counts of valid, invalid, errored and unreachable rows with timing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use link_checker::{Config, Credentials, CsvLoader, Pipeline, RunContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let credentials = Credentials::from_env()?;
//!     let rows = CsvLoader::new().load_path("businesses.csv".as_ref())?;
//!
//!     let pipeline = Pipeline::from_credentials(&config, &credentials)?;
//!     let report = pipeline.run(&rows, &RunContext::new(config)).await;
//!
//!     link_checker::write_results_path("results.csv".as_ref(), &report.rows)?;
//!     println!("{}", report.summary);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

pub use config::{Config, Credentials};
pub use crate::core::csv::{CsvLoader, write_results, write_results_path};
pub use crate::core::pipeline::{CancelHandle, Pipeline, RunContext};
pub use crate::core::providers::{ExaClient, OpenRouterClient};
pub use crate::core::traits::{Classifier, ContentRetriever};
pub use crate::core::types::{InputRow, ResultRow, RunReport, RunSummary, Verdict};
pub use utils::error::{LinkCheckError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub built_at: &'static str,
    /// Short git hash
    pub git_revision: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            built_at: option_env!("LINK_CHECKER_BUILT_AT").unwrap_or("unknown"),
            git_revision: option_env!("LINK_CHECKER_GIT_REVISION").unwrap_or("unknown"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", NAME, self.version, self.git_revision)
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
