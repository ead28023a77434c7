//! Content retrieval seam

use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetches extracted page text for a single URL.
///
/// Any `Err` is recorded as `website_working = FALSE` for that row; it never
/// aborts the run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRetriever: Send + Sync {
    async fn retrieve(&self, url: &str) -> Result<String>;
}
