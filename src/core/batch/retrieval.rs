//! Group-by-group retrieval driver

use futures::future::join_all;
use tracing::{debug, info, warn};

use super::BatchConfig;
use crate::core::pipeline::RunContext;
use crate::core::traits::ContentRetriever;
use crate::core::types::RetrievalResult;
use crate::utils::error::{RetryPolicy, TimeoutWrapper};

/// Reason recorded for URLs never reached because the run was cancelled
pub const CANCELLED_REASON: &str = "Run cancelled before retrieval";

/// Retrieves URLs in groups with a pause between groups
#[derive(Debug, Clone)]
pub struct BatchRetriever {
    config: BatchConfig,
    retry: RetryPolicy,
    timeout: TimeoutWrapper,
}

impl Default for BatchRetriever {
    fn default() -> Self {
        Self::new(BatchConfig::default(), RetryPolicy::default())
    }
}

impl BatchRetriever {
    pub fn new(config: BatchConfig, retry: RetryPolicy) -> Self {
        let timeout = TimeoutWrapper::new(config.timeout);
        Self {
            config,
            retry,
            timeout,
        }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Retrieve every URL, returning one result per URL in input order.
    ///
    /// Failures never abort a group. Cancellation is checked before each
    /// group; URLs not reached are reported as failures.
    pub async fn retrieve_all(
        &self,
        retriever: &dyn ContentRetriever,
        urls: &[String],
        ctx: &RunContext,
    ) -> Vec<RetrievalResult> {
        let groups = self.config.group_count(urls.len());
        let mut results = Vec::with_capacity(urls.len());

        info!(
            urls = urls.len(),
            groups,
            batch_size = self.config.batch_size,
            "Starting content retrieval"
        );

        for (index, group) in urls.chunks(self.config.batch_size).enumerate() {
            if ctx.is_cancelled() {
                warn!(
                    completed_groups = index,
                    groups, "Retrieval cancelled, skipping remaining groups"
                );
                break;
            }

            debug!(group = index + 1, groups, size = group.len(), "Retrieving group");
            let group_results =
                join_all(group.iter().map(|url| self.retrieve_one(retriever, url))).await;

            for result in &group_results {
                ctx.progress().record_retrieval(result.working);
            }
            ctx.progress().record_group();

            let working = group_results.iter().filter(|r| r.working).count();
            info!(
                group = index + 1,
                groups,
                working,
                failed = group_results.len() - working,
                "Group retrieved"
            );
            results.extend(group_results);

            if index + 1 < groups {
                tokio::time::sleep(self.config.batch_delay).await;
            }
        }

        for url in &urls[results.len()..] {
            results.push(RetrievalResult::failure(url.as_str(), CANCELLED_REASON));
        }

        results
    }

    async fn retrieve_one(&self, retriever: &dyn ContentRetriever, url: &str) -> RetrievalResult {
        let timeout = &self.timeout;
        let outcome = self
            .retry
            .call(|| async move { timeout.call(retriever.retrieve(url)).await.and_then(|r| r) })
            .await;

        match outcome {
            Ok(content) if !content.trim().is_empty() => {
                debug!(url, chars = content.chars().count(), "Retrieved content");
                RetrievalResult::success(url, content)
            }
            Ok(_) => {
                warn!(url, "Retrieval returned empty content");
                RetrievalResult::failure(url, "No content returned")
            }
            Err(e) => {
                warn!(url, error = %e, "Retrieval failed");
                RetrievalResult::failure(url, e.to_string())
            }
        }
    }
}
