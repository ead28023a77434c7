//! Content retrieval configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Content retrieval settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// API base URL
    #[serde(default = "default_exa_base_url")]
    pub base_url: String,
    /// URLs per group
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause after every group except the last
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    /// Per-URL timeout in seconds
    #[serde(default = "default_retrieval_timeout")]
    pub timeout_seconds: u64,
    /// Livecrawl mode passed to the retrieval API
    #[serde(default = "default_livecrawl")]
    pub livecrawl: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_url: default_exa_base_url(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            timeout_seconds: default_retrieval_timeout(),
            livecrawl: default_livecrawl(),
        }
    }
}

impl RetrievalConfig {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url, "Retrieval base_url")?;
        if self.batch_size == 0 {
            return Err("batch_size must be greater than 0".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}
