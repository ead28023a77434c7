//! Configuration integration tests

#[cfg(test)]
mod tests {
    use crate::common::write_file;
    use crate::{assert_err, assert_ok};
    use link_checker::config::{Config, Credentials};
    use link_checker::utils::error::LinkCheckError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_load_file_then_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "link_checker.yaml",
            "retrieval:\n  batch_size: 20\n  batch_delay_ms: 1000\nlogging:\n  level: debug\n  json: true\n",
        );

        let config = assert_ok!(Config::load(Some(path.as_path())).await);
        assert_eq!(config.retrieval.batch_size, 20);
        assert_eq!(config.retrieval.batch_delay(), Duration::from_secs(1));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.classification.timeout(), Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_invalid_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "bad.yaml",
            "classification:\n  base_url: ftp://models.example\n",
        );

        let err = assert_err!(Config::from_file(&path).await);
        assert!(matches!(err, LinkCheckError::Config(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.retrieval.batch_size, 10);
        assert_eq!(config.retrieval.batch_delay(), Duration::from_millis(500));
        assert_eq!(config.retrieval.timeout(), Duration::from_secs(30));
        assert_eq!(config.classification.model, "openai/gpt-oss-20b");
        assert_eq!(config.classification.concurrency, 1);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.backoff_ms, 1000);
    }

    #[test]
    fn test_example_file_parses() {
        let config = assert_ok!(Config::from_yaml_str(include_str!(
            "../../config/link_checker.yaml.example"
        )));
        assert_eq!(config.retrieval, Config::default().retrieval);
        assert_eq!(config.retry, Config::default().retry);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = assert_ok!(config.to_yaml());
        let parsed = assert_ok!(Config::from_yaml_str(&yaml));
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_zero_values_rejected() {
        for yaml in [
            "retrieval:\n  batch_size: 0\n",
            "retrieval:\n  timeout_seconds: 0\n",
            "classification:\n  timeout_seconds: 0\n",
            "classification:\n  concurrency: 0\n",
            "retry:\n  max_attempts: 0\n",
        ] {
            assert!(Config::from_yaml_str(yaml).is_err(), "accepted: {}", yaml);
        }
    }

    #[test]
    fn test_credentials_report_every_missing_key() {
        let err = assert_err!(Credentials::from_lookup(|_| None));
        let message = err.to_string();
        assert!(message.contains("EXA_API_KEY"));
        assert!(message.contains("OPENROUTER_API_KEY"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_credentials_from_lookup() {
        let credentials = assert_ok!(Credentials::from_lookup(|key| match key {
            "EXA_API_KEY" => Some("exa-key".to_string()),
            "OPENROUTER_API_KEY" => Some(" or-key ".to_string()),
            _ => None,
        }));
        assert_eq!(credentials.exa_api_key(), "exa-key");
        assert_eq!(credentials.openrouter_api_key(), "or-key");
        assert!(!format!("{:?}", credentials).contains("exa-key"));
    }
}
