//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! environment overrides. Credentials live in [`credentials`].

pub mod credentials;
pub mod models;

pub use credentials::Credentials;
pub use models::*;

use crate::utils::error::{LinkCheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
    #[serde(default)]
    pub retry: RetrySettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LinkCheckError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| LinkCheckError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults or `path`, then environment overrides, then validation
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };
        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides read through `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("EXA_BASE_URL") {
            self.retrieval.base_url = base_url;
        }
        if let Some(base_url) = lookup("OPENROUTER_BASE_URL") {
            self.classification.base_url = base_url;
        }
        if let Some(model) = lookup("OPENROUTER_MODEL") {
            self.classification.model = model;
        }
        if let Some(size) = lookup("LINK_CHECKER_BATCH_SIZE") {
            self.retrieval.batch_size = size.parse().map_err(|e| {
                LinkCheckError::config(format!("Invalid LINK_CHECKER_BATCH_SIZE: {}", e))
            })?;
        }
        if let Some(delay) = lookup("LINK_CHECKER_BATCH_DELAY_MS") {
            self.retrieval.batch_delay_ms = delay.parse().map_err(|e| {
                LinkCheckError::config(format!("Invalid LINK_CHECKER_BATCH_DELAY_MS: {}", e))
            })?;
        }
        Ok(self)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.retrieval
            .validate()
            .map_err(|e| LinkCheckError::config(format!("Retrieval config error: {}", e)))?;
        self.classification
            .validate()
            .map_err(|e| LinkCheckError::config(format!("Classification config error: {}", e)))?;
        self.retry
            .validate()
            .map_err(|e| LinkCheckError::config(format!("Retry config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
