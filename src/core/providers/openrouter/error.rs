//! OpenRouter Error types

use thiserror::Error;

/// OpenRouter specific errors
#[derive(Error, Debug)]
pub enum OpenRouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error
    #[error("Failed to parse response: {0}")]
    Parsing(String),

    /// Authentication error
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit error
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Model not supported
    #[error("Model not supported: {0}")]
    UnsupportedModel(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// API error with status code
    #[error("API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The completion carried no choices
    #[error("No response content: {0}")]
    EmptyResponse(String),
}

impl From<serde_json::Error> for OpenRouterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parsing(err.to_string())
    }
}

impl OpenRouterError {
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Network(_) => "network",
            Self::Parsing(_) => "parsing",
            Self::Authentication(_) => "authentication",
            Self::RateLimit(_) => "rate_limit",
            Self::UnsupportedModel(_) => "unsupported_model",
            Self::Timeout(_) => "timeout",
            Self::ApiError { .. } => "api_error",
            Self::InvalidRequest(_) => "invalid_request",
            Self::EmptyResponse(_) => "empty_response",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::RateLimit(_) => true,
            Self::ApiError { status_code, .. } if *status_code >= 500 => true,
            _ => false,
        }
    }
}
