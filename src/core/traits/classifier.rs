//! Classification seam

use crate::core::types::Verdict;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Judges whether retrieved content belongs to a business.
///
/// Implementations return `Valid` or `Invalid`; the pipeline turns any `Err`
/// into [`Verdict::Error`] for that row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, business_name: &str, content: &str) -> Result<Verdict>;
}
