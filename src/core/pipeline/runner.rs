//! Pipeline driver

use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::context::RunContext;
use crate::config::{Config, Credentials};
use crate::core::batch::{BatchConfig, BatchRetriever};
use crate::core::providers::{ExaClient, ExaConfig, OpenRouterClient, OpenRouterConfig};
use crate::core::traits::{Classifier, ContentRetriever};
use crate::core::types::{
    ClassificationResult, InputRow, ResultRow, RetrievalResult, RunReport, RunSummary, Verdict,
};
use crate::utils::error::{Result, RetryPolicy, TimeoutWrapper};

/// Retrieval, classification and aggregation for one input file
#[derive(Clone)]
pub struct Pipeline {
    retriever: Arc<dyn ContentRetriever>,
    classifier: Arc<dyn Classifier>,
    batch: BatchRetriever,
    retry: RetryPolicy,
    classify_timeout: TimeoutWrapper,
    concurrency: usize,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("batch", &self.batch)
            .field("retry", &self.retry)
            .field("classify_timeout", &self.classify_timeout)
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    pub fn new(
        retriever: Arc<dyn ContentRetriever>,
        classifier: Arc<dyn Classifier>,
        config: &Config,
    ) -> Self {
        let retry = RetryPolicy::new(config.retry.to_retry_config());
        Self {
            retriever,
            classifier,
            batch: BatchRetriever::new(BatchConfig::from_settings(&config.retrieval), retry.clone()),
            retry,
            classify_timeout: TimeoutWrapper::new(config.classification.timeout()),
            concurrency: config.classification.concurrency.max(1),
        }
    }

    /// Pipeline backed by the Exa and OpenRouter clients
    pub fn from_credentials(config: &Config, credentials: &Credentials) -> Result<Self> {
        let exa = ExaClient::new(ExaConfig::from_settings(
            &config.retrieval,
            credentials.exa_api_key(),
        ))?;
        let openrouter = OpenRouterClient::new(OpenRouterConfig::from_settings(
            &config.classification,
            credentials.openrouter_api_key(),
        ))?;
        Ok(Self::new(Arc::new(exa), Arc::new(openrouter), config))
    }

    /// Process `rows`, returning exactly one result row per input row, in order.
    pub async fn run(&self, rows: &[InputRow], ctx: &RunContext) -> RunReport {
        let started_at = Utc::now();
        ctx.progress().set_total(rows.len());
        info!(rows = rows.len(), "Starting link check");

        let urls: Vec<String> = rows.iter().map(|row| row.url.clone()).collect();
        let retrievals = self
            .batch
            .retrieve_all(self.retriever.as_ref(), &urls, ctx)
            .await;

        let verdicts = self.classify_all(rows, &retrievals, ctx).await;

        let results: Vec<ResultRow> = rows
            .iter()
            .zip(retrievals)
            .zip(verdicts)
            .map(|((row, retrieval), verdict)| {
                let classification = verdict.map(|verdict| ClassificationResult {
                    url: row.url.clone(),
                    verdict,
                });
                ResultRow::from_parts(row, retrieval, classification)
            })
            .collect();

        let summary = RunSummary::from_rows(&results, started_at, Utc::now())
            .with_cancelled(ctx.is_cancelled());
        info!(
            total = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            error = summary.error,
            not_working = summary.not_working,
            cancelled = summary.cancelled,
            "Link check finished"
        );

        RunReport {
            rows: results,
            summary,
        }
    }

    /// Re-run rows of a previous result set that were not working or errored.
    ///
    /// Other rows are carried over unchanged and the original order is kept.
    pub async fn reprocess(&self, previous: Vec<ResultRow>, ctx: &RunContext) -> RunReport {
        let started_at = Utc::now();
        let positions: Vec<usize> = previous
            .iter()
            .enumerate()
            .filter(|(_, row)| row.needs_reprocessing())
            .map(|(index, _)| index)
            .collect();
        info!(
            total = previous.len(),
            reprocess = positions.len(),
            "Reprocessing failed rows"
        );

        let inputs: Vec<InputRow> = positions.iter().map(|&i| previous[i].input()).collect();
        let report = self.run(&inputs, ctx).await;

        let mut rows = previous;
        for (position, row) in positions.into_iter().zip(report.rows) {
            rows[position] = row;
        }

        let summary = RunSummary::from_rows(&rows, started_at, Utc::now())
            .with_cancelled(report.summary.cancelled);
        RunReport { rows, summary }
    }

    /// One optional verdict per row; `None` for rows whose page was not retrieved.
    async fn classify_all(
        &self,
        rows: &[InputRow],
        retrievals: &[RetrievalResult],
        ctx: &RunContext,
    ) -> Vec<Option<Verdict>> {
        let pending = retrievals.iter().filter(|r| r.working).count();
        info!(
            pending,
            concurrency = self.concurrency,
            "Starting classification"
        );

        stream::iter(rows.iter().zip(retrievals))
            .map(|(row, retrieval)| async move {
                let content = match (retrieval.working, retrieval.content.as_deref()) {
                    (true, Some(content)) => content,
                    _ => return None,
                };
                if ctx.is_cancelled() {
                    debug!(url = %row.url, "Run cancelled, row left unclassified");
                    return Some(Verdict::Error);
                }
                let verdict = self.classify_one(row, content).await;
                ctx.progress().record_classification();
                Some(verdict)
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn classify_one(&self, row: &InputRow, content: &str) -> Verdict {
        let timeout = &self.classify_timeout;
        let classifier = self.classifier.as_ref();
        let business_name = row.business_name.as_str();

        let outcome = self
            .retry
            .call(|| async move {
                timeout
                    .call(classifier.classify(business_name, content))
                    .await
                    .and_then(|r| r)
            })
            .await;

        match outcome {
            Ok(verdict) => {
                debug!(url = %row.url, verdict = %verdict, "Row classified");
                verdict
            }
            Err(e) => {
                warn!(url = %row.url, business_name, error = %e, "Classification failed");
                Verdict::Error
            }
        }
    }
}
