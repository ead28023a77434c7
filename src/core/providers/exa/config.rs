//! Exa client configuration

use crate::config::RetrievalConfig;
use crate::config::models::{default_exa_base_url, default_livecrawl, default_retrieval_timeout};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exa client configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ExaConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub livecrawl: String,
}

impl std::fmt::Debug for ExaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExaConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("livecrawl", &self.livecrawl)
            .finish()
    }
}

impl Default for ExaConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_exa_base_url(),
            timeout_seconds: default_retrieval_timeout(),
            livecrawl: default_livecrawl(),
        }
    }
}

impl ExaConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Build from the retrieval section of the run configuration
    pub fn from_settings(settings: &RetrievalConfig, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: settings.base_url.clone(),
            timeout_seconds: settings.timeout_seconds,
            livecrawl: settings.livecrawl.clone(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn contents_url(&self) -> String {
        format!("{}/contents", self.base_url.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("Exa API key is required".to_string());
        }
        if !self.base_url.starts_with("http") {
            return Err("Exa base URL must start with http:// or https://".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}
