//! Exa error types

use thiserror::Error;

/// Exa specific errors
#[derive(Error, Debug)]
pub enum ExaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parsing(String),

    /// Exa reported an error status for the URL (crawl failure, blocked, 404, ...)
    #[error("Content unavailable for {url}: {reason}")]
    ContentUnavailable { url: String, reason: String },

    /// The URL appeared in neither `results` nor `statuses`
    #[error("URL not found in response: {0}")]
    MissingResult(String),

    #[error("No text content returned for {0}")]
    EmptyContent(String),
}

impl From<serde_json::Error> for ExaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parsing(err.to_string())
    }
}

impl ExaError {
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Authentication(_) => "authentication",
            Self::RateLimit(_) => "rate_limit",
            Self::ApiError { .. } => "api_error",
            Self::Parsing(_) => "parsing",
            Self::ContentUnavailable { .. } => "content_unavailable",
            Self::MissingResult(_) => "missing_result",
            Self::EmptyContent(_) => "empty_content",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) | Self::RateLimit(_) => true,
            Self::ApiError { status_code, .. } if *status_code >= 500 => true,
            _ => false,
        }
    }
}
