//! Error types for the link checker

use crate::core::providers::exa::ExaError;
use crate::core::providers::openrouter::OpenRouterError;
use thiserror::Error;

/// Result type alias for the link checker
pub type Result<T> = std::result::Result<T, LinkCheckError>;

/// Main error type for the link checker
#[derive(Error, Debug)]
pub enum LinkCheckError {
    /// Configuration errors, including missing credentials
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content retrieval service errors
    #[error("Content retrieval error: {0}")]
    Exa(#[from] ExaError),

    /// Classification service errors
    #[error("Classification error: {0}")]
    OpenRouter(#[from] OpenRouterError),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Rate limiting errors
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinkCheckError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether a retry of the same call may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) | Self::RateLimit(_) => true,
            Self::HttpClient(e) => e.is_timeout() || e.is_connect(),
            Self::Exa(e) => e.is_retryable(),
            Self::OpenRouter(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Fatal errors abort a run before any row is processed
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Validation(_) | Self::Csv(_) | Self::Io(_) | Self::Yaml(_)
        )
    }
}
