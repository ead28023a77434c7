//! Pipeline integration tests
//!
//! Drive full runs over the stub retriever and classifier and check the
//! row-level and summary guarantees of a run.

#[cfg(test)]
mod tests {
    use crate::common::{StubClassifier, StubRetriever, input_csv, input_rows, test_config, write_file};
    use crate::{assert_err, assert_ok};
    use link_checker::core::csv::{CsvLoader, results_to_string, write_results_path};
    use link_checker::core::pipeline::{Pipeline, RunContext};
    use link_checker::core::types::{InputRow, Verdict};
    use link_checker::utils::error::LinkCheckError;
    use std::sync::Arc;
    use std::time::Duration;

    fn pipeline(retriever: &Arc<StubRetriever>, classifier: &Arc<StubClassifier>) -> Pipeline {
        Pipeline::new(retriever.clone(), classifier.clone(), &test_config())
    }

    // ==================== Row Guarantees ====================

    #[tokio::test(start_paused = true)]
    async fn test_every_row_comes_back_in_order() {
        let retriever = Arc::new(StubRetriever::new().failing("https://site4.example"));
        let classifier = Arc::new(StubClassifier::new());
        let rows = input_rows(23);

        let report = pipeline(&retriever, &classifier)
            .run(&rows, &RunContext::new(test_config()))
            .await;

        assert_eq!(report.rows.len(), rows.len());
        for (input, output) in rows.iter().zip(&report.rows) {
            assert_eq!(output.business_name, input.business_name);
            assert_eq!(output.url, input.url);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_retrieval_skips_classification() {
        let retriever = Arc::new(
            StubRetriever::new()
                .failing("https://site1.example")
                .failing("https://site2.example"),
        );
        let classifier = Arc::new(StubClassifier::new());

        let report = pipeline(&retriever, &classifier)
            .run(&input_rows(4), &RunContext::new(test_config()))
            .await;

        assert_eq!(retriever.calls(), 4);
        assert_eq!(classifier.calls(), 2);
        assert_eq!(classifier.seen(), vec!["Business 0", "Business 3"]);
        for row in &report.rows[1..3] {
            assert!(!row.website_working);
            assert_eq!(row.result, None);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_classification_failure_is_row_level() {
        let retriever = Arc::new(StubRetriever::new());
        let classifier = Arc::new(StubClassifier::new().failing("Business 0"));

        let report = pipeline(&retriever, &classifier)
            .run(&input_rows(2), &RunContext::new(test_config()))
            .await;

        assert_eq!(report.rows[0].result, Some(Verdict::Error));
        assert!(report.rows[0].website_working);
        assert_eq!(report.rows[1].result, Some(Verdict::Invalid));
        assert_eq!(report.summary.error, 1);
    }

    // ==================== Summary ====================

    #[tokio::test(start_paused = true)]
    async fn test_summary_counts_sum_to_total() {
        let retriever = Arc::new(
            StubRetriever::new()
                .failing("https://site0.example")
                .page("https://site1.example", "Business 1 official homepage"),
        );
        let classifier = Arc::new(StubClassifier::new().failing("Business 2"));

        let report = pipeline(&retriever, &classifier)
            .run(&input_rows(5), &RunContext::new(test_config()))
            .await;

        let summary = &report.summary;
        assert_eq!(summary.total, 5);
        assert_eq!(summary.not_working, 1);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.error, 1);
        assert_eq!(summary.invalid, 2);
        assert_eq!(
            summary.valid + summary.invalid + summary.error + summary.not_working,
            summary.total
        );
        assert!(summary.finished_at >= summary.started_at);
    }

    // ==================== Batching ====================

    #[tokio::test(start_paused = true)]
    async fn test_groups_and_delay() {
        let retriever = Arc::new(StubRetriever::new());
        let classifier = Arc::new(StubClassifier::new());
        let ctx = RunContext::new(test_config());

        let start = tokio::time::Instant::now();
        pipeline(&retriever, &classifier)
            .run(&input_rows(31), &ctx)
            .await;

        let snapshot = ctx.progress().snapshot();
        assert_eq!(snapshot.groups_completed, 4);
        assert_eq!(snapshot.attempted(), 31);
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_group_has_no_delay() {
        let retriever = Arc::new(StubRetriever::new());
        let classifier = Arc::new(StubClassifier::new());

        let start = tokio::time::Instant::now();
        pipeline(&retriever, &classifier)
            .run(&input_rows(10), &RunContext::new(test_config()))
            .await;

        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_produces_empty_report() {
        let retriever = Arc::new(StubRetriever::new());
        let classifier = Arc::new(StubClassifier::new());

        let report = pipeline(&retriever, &classifier)
            .run(&[], &RunContext::new(test_config()))
            .await;

        assert!(report.rows.is_empty());
        assert_eq!(report.summary.total, 0);
        assert_eq!(retriever.calls(), 0);
    }

    // ==================== Determinism ====================

    #[tokio::test(start_paused = true)]
    async fn test_identical_output_across_runs() {
        let mut outputs = Vec::new();
        for _ in 0..2 {
            let retriever = Arc::new(StubRetriever::new().failing("https://site7.example"));
            let classifier = Arc::new(StubClassifier::new().failing("Business 3"));
            let report = pipeline(&retriever, &classifier)
                .run(&input_rows(12), &RunContext::new(test_config()))
                .await;
            outputs.push(assert_ok!(results_to_string(&report.rows)));
        }
        assert_eq!(outputs[0], outputs[1]);
    }

    // ==================== Example Scenarios ====================

    #[tokio::test(start_paused = true)]
    async fn test_apple_scenario_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(
            dir.path(),
            "input.csv",
            "business_name,URL\nApple Inc,https://www.apple.com\n",
        );
        let output = dir.path().join("results.csv");

        let retriever =
            Arc::new(StubRetriever::new().page("https://www.apple.com", "Apple designs the iPhone"));
        let classifier = Arc::new(StubClassifier::new());

        let rows = assert_ok!(CsvLoader::new().load_path(&input));
        let report = pipeline(&retriever, &classifier)
            .run(&rows, &RunContext::new(test_config()))
            .await;
        assert_ok!(write_results_path(&output, &report.rows));

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "business_name,URL,scraped_content,website_working,result\n\
             Apple Inc,https://www.apple.com,Apple designs the iPhone,TRUE,VALID\n"
        );
        assert_eq!(report.summary.valid, 1);
        assert_eq!(report.summary.total, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_header_rejected_before_network() {
        let retriever = Arc::new(StubRetriever::new());
        let classifier = Arc::new(StubClassifier::new());

        let result = CsvLoader::new().load_str("name,link\nApple,https://www.apple.com\n");
        let err = assert_err!(result);
        assert!(matches!(err, LinkCheckError::Validation(_)));
        assert!(err.to_string().contains("business_name"));

        assert_eq!(retriever.calls(), 0);
        assert_eq!(classifier.calls(), 0);
    }

    // ==================== Retry Failed ====================

    #[tokio::test(start_paused = true)]
    async fn test_retry_failed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let rows = input_rows(3);
        let input = write_file(dir.path(), "input.csv", &input_csv(&rows));
        let results = dir.path().join("results.csv");

        let first_retriever = Arc::new(StubRetriever::new().failing("https://site1.example"));
        let first_classifier = Arc::new(StubClassifier::new().failing("Business 2"));
        let loaded = assert_ok!(CsvLoader::new().load_path(&input));
        let first = pipeline(&first_retriever, &first_classifier)
            .run(&loaded, &RunContext::new(test_config()))
            .await;
        assert_ok!(write_results_path(&results, &first.rows));
        assert_eq!(first.summary.not_working, 1);
        assert_eq!(first.summary.error, 1);

        let retriever = Arc::new(StubRetriever::new());
        let classifier = Arc::new(StubClassifier::new());
        let previous = assert_ok!(CsvLoader::new().load_results_path(&results));
        let second = pipeline(&retriever, &classifier)
            .reprocess(previous, &RunContext::new(test_config()))
            .await;

        assert_eq!(
            retriever.seen(),
            vec!["https://site1.example", "https://site2.example"]
        );
        assert_eq!(second.rows[0], first.rows[0]);
        assert!(second.rows.iter().all(|row| row.website_working));
        assert_eq!(second.summary.error, 0);
        assert_eq!(second.summary.not_working, 0);
        assert_eq!(second.summary.total, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_run_is_flagged() {
        let retriever = Arc::new(StubRetriever::new());
        let classifier = Arc::new(StubClassifier::new());
        let ctx = RunContext::new(test_config());
        ctx.cancel_handle().cancel();

        let report = pipeline(&retriever, &classifier)
            .run(&[InputRow::new("Acme", "https://acme.example")], &ctx)
            .await;

        assert!(report.summary.cancelled);
        assert_eq!(report.summary.not_working, 1);
        assert_eq!(retriever.calls(), 0);
    }
}
