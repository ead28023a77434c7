//! Classification configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// API base URL
    #[serde(default = "default_openrouter_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_classification_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Content is truncated to this many characters before prompting
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,
    /// Sent as `HTTP-Referer`
    #[serde(default)]
    pub site_url: Option<String>,
    /// Sent as `X-Title`
    #[serde(default)]
    pub site_name: Option<String>,
    /// Classification calls in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            base_url: default_openrouter_base_url(),
            model: default_model(),
            timeout_seconds: default_classification_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_content_chars: default_max_content_chars(),
            site_url: None,
            site_name: None,
            concurrency: default_concurrency(),
        }
    }
}

impl ClassificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url, "Classification base_url")?;
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than 0".to_string());
        }
        if self.concurrency == 0 {
            return Err("concurrency must be at least 1".to_string());
        }
        if self.max_content_chars == 0 {
            return Err("max_content_chars must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(format!("top_p must be between 0.0 and 1.0, got {}", self.top_p));
        }
        Ok(())
    }
}
