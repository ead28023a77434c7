//! OpenRouter client tests against a local mock server

#[cfg(test)]
mod tests {
    use crate::common::{StubRetriever, completion, input_rows, mock_server_config};
    use crate::{assert_err, assert_ok};
    use link_checker::core::pipeline::{Pipeline, RunContext};
    use link_checker::core::providers::openrouter::{OpenRouterClient, OpenRouterConfig, OpenRouterError};
    use link_checker::core::traits::Classifier;
    use link_checker::core::types::Verdict;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> OpenRouterClient {
        assert_ok!(OpenRouterClient::new(
            OpenRouterConfig::new("or-test-key").with_base_url(server.uri())
        ))
    }

    async fn answer(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    // ==================== Requests ====================

    #[tokio::test]
    async fn test_request_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer or-test-key"))
            .and(header("http-referer", "https://link-checker-app.com"))
            .and(header("x-title", "Link Checker App"))
            .and(body_partial_json(json!({
                "model": "openai/gpt-oss-20b",
                "max_tokens": 8000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("VALID")))
            .expect(1)
            .mount(&server)
            .await;

        let verdict = assert_ok!(
            client(&server)
                .classify_business("Apple Inc", "Apple designs the iPhone")
                .await
        );
        assert_eq!(verdict, Verdict::Valid);
    }

    #[tokio::test]
    async fn test_prompt_carries_business_and_content() {
        let server = MockServer::start().await;
        answer(&server, completion("INVALID")).await;

        assert_ok!(client(&server).classify_business("Acme Widgets", "car repair tips").await);

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let prompt = body["messages"][0]["content"].as_str().unwrap();
        assert!(prompt.contains("Business Name: Acme Widgets"));
        assert!(prompt.contains("Scraped Content: car repair tips"));
    }

    // ==================== Parsing ====================

    #[tokio::test]
    async fn test_answers_map_to_verdicts() {
        for (answer_text, expected) in [
            ("VALID", Verdict::Valid),
            ("invalid.", Verdict::Invalid),
            ("I think this is VALID", Verdict::Valid),
            ("no idea", Verdict::Invalid),
        ] {
            let server = MockServer::start().await;
            answer(&server, completion(answer_text)).await;
            let verdict = assert_ok!(client(&server).classify_business("Acme", "text").await);
            assert_eq!(verdict, expected, "answer {:?}", answer_text);
        }
    }

    #[tokio::test]
    async fn test_reasoning_fallback() {
        let server = MockServer::start().await;
        answer(
            &server,
            json!({"choices": [{"message": {"content": "", "reasoning": "Official site. VALID"}}]}),
        )
        .await;

        let verdict = assert_ok!(client(&server).classify_business("Acme", "text").await);
        assert_eq!(verdict, Verdict::Valid);
    }

    #[tokio::test]
    async fn test_no_choices_is_error() {
        let server = MockServer::start().await;
        answer(&server, json!({"id": "gen-1", "choices": []})).await;

        let err = assert_err!(client(&server).classify_business("Acme", "text").await);
        assert!(matches!(err, OpenRouterError::EmptyResponse(_)));
    }

    #[tokio::test]
    async fn test_http_errors_are_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let err = assert_err!(client(&server).classify_business("Acme", "text").await);
        assert!(matches!(err, OpenRouterError::RateLimit(_)));
        assert!(err.is_retryable());
    }

    // ==================== Connection Check ====================

    #[tokio::test]
    async fn test_connection_check() {
        let server = MockServer::start().await;
        answer(&server, completion("OK")).await;
        assert!(client(&server).test_connection().await);

        let failing = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&failing)
            .await;
        assert!(!client(&failing).test_connection().await);
    }

    // ==================== Pipeline ====================

    #[tokio::test]
    async fn test_classifier_trait_and_pipeline_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"max_tokens": 8000})))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let config = mock_server_config(&server.uri());
        let openrouter = assert_ok!(OpenRouterClient::new(OpenRouterConfig::from_settings(
            &config.classification,
            "or-test-key"
        )));
        let classifier: &dyn Classifier = &openrouter;
        assert!(classifier.classify("Acme", "text").await.is_err());

        let retriever = Arc::new(StubRetriever::new());
        let pipeline = Pipeline::new(retriever, Arc::new(openrouter), &config);
        let report = pipeline.run(&input_rows(2), &RunContext::new(config)).await;

        assert!(report.rows.iter().all(|r| r.result == Some(Verdict::Error)));
        assert_eq!(report.summary.error, 2);
    }
}
