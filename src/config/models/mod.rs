//! Configuration data models

pub mod classification;
pub mod logging;
pub mod retrieval;
pub mod retry;

pub use classification::*;
pub use logging::*;
pub use retrieval::*;
pub use retry::*;

/// Default content retrieval API base URL
pub fn default_exa_base_url() -> String {
    "https://api.exa.ai".to_string()
}

/// Default classification API base URL
pub fn default_openrouter_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

/// Default classification model
pub fn default_model() -> String {
    "openai/gpt-oss-20b".to_string()
}

/// URLs per retrieval group
pub fn default_batch_size() -> usize {
    10
}

/// Pause between retrieval groups in milliseconds
pub fn default_batch_delay_ms() -> u64 {
    500
}

/// Retrieval timeout in seconds
pub fn default_retrieval_timeout() -> u64 {
    30
}

/// Classification timeout in seconds
pub fn default_classification_timeout() -> u64 {
    60
}

/// Default livecrawl mode for content retrieval
pub fn default_livecrawl() -> String {
    "always".to_string()
}

/// Default completion token cap
pub fn default_max_tokens() -> u32 {
    8000
}

/// Default sampling temperature
pub fn default_temperature() -> f32 {
    0.1
}

/// Default nucleus sampling value
pub fn default_top_p() -> f32 {
    0.9
}

/// Scraped content beyond this many characters is truncated before classification
pub fn default_max_content_chars() -> usize {
    8000
}

/// Sequential classification
pub fn default_concurrency() -> usize {
    1
}

/// Default retry attempts, first call included
pub fn default_max_attempts() -> u32 {
    2
}

/// Default first retry delay in milliseconds
pub fn default_backoff_ms() -> u64 {
    1000
}

/// Fixed backoff unless configured otherwise
pub fn default_backoff_multiplier() -> f64 {
    1.0
}

/// Default cap on a single retry delay in milliseconds
pub fn default_max_backoff_ms() -> u64 {
    30_000
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn validate_base_url(value: &str, context: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value)
        .map_err(|e| format!("{} has invalid URL format: {}", context, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "{} must use http:// or https:// scheme, got: {}",
            context, scheme
        )),
    }
}
