//! OpenRouter Provider Configuration

use crate::config::ClassificationConfig;
use crate::config::models::{
    default_classification_timeout, default_max_content_chars, default_max_tokens, default_model,
    default_openrouter_base_url, default_temperature, default_top_p,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default `HTTP-Referer` header
pub const DEFAULT_SITE_URL: &str = "https://link-checker-app.com";
/// Default `X-Title` header
pub const DEFAULT_SITE_NAME: &str = "Link Checker App";

/// OpenRouter provider configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// API key for OpenRouter
    pub api_key: String,
    /// Base URL for OpenRouter API
    pub base_url: String,
    /// Model used for every classification
    pub model: String,
    /// Site URL for OpenRouter (optional)
    pub site_url: Option<String>,
    /// Site Name for OpenRouter (optional)
    pub site_name: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    /// Scraped content is cut to this many characters
    pub max_content_chars: usize,
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish_non_exhaustive()
    }
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_openrouter_base_url(),
            model: default_model(),
            site_url: Some(DEFAULT_SITE_URL.to_string()),
            site_name: Some(DEFAULT_SITE_NAME.to_string()),
            timeout_seconds: default_classification_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_content_chars: default_max_content_chars(),
        }
    }
}

impl OpenRouterConfig {
    /// Create new OpenRouter configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Build from the classification section of the run configuration
    pub fn from_settings(settings: &ClassificationConfig, api_key: impl Into<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: api_key.into(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            site_url: settings.site_url.clone().or(defaults.site_url),
            site_name: settings.site_name.clone().or(defaults.site_name),
            timeout_seconds: settings.timeout_seconds,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            top_p: settings.top_p,
            max_content_chars: settings.max_content_chars,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("OpenRouter API key is required".to_string());
        }

        if self.base_url.is_empty() {
            return Err("OpenRouter base URL is required".to_string());
        }

        if !self.base_url.starts_with("http") {
            return Err("OpenRouter base URL must start with http:// or https://".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("OpenRouter model is required".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Get request headers for OpenRouter API
    pub fn get_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::with_capacity(4);

        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key.trim()),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        if let Some(site_url) = &self.site_url {
            headers.insert("HTTP-Referer".to_string(), site_url.clone());
        }

        if let Some(site_name) = &self.site_name {
            headers.insert("X-Title".to_string(), site_name.clone());
        }

        headers
    }
}
