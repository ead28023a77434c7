//! Exa HTTP client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::core::providers::user_agent;
use crate::core::traits::{ContentRetriever, ErrorMapper};
use crate::utils::error::Result;

use super::config::ExaConfig;
use super::error::ExaError;
use super::models::{ContentsRequest, ContentsResponse};

/// Exa-specific error mapper implementation
#[derive(Debug)]
pub struct ExaErrorMapper;

impl ErrorMapper<ExaError> for ExaErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ExaError {
        match status_code {
            401 => ExaError::Authentication("Invalid API key".to_string()),
            403 => ExaError::Authentication("Forbidden: insufficient permissions".to_string()),
            429 => ExaError::RateLimit("Rate limit exceeded".to_string()),
            _ => ExaError::ApiError {
                status_code,
                message: format!("HTTP error {}: {}", status_code, response_body),
            },
        }
    }

    fn map_network_error(&self, error: &reqwest::Error) -> ExaError {
        if error.is_timeout() {
            ExaError::Timeout(format!("Request timed out: {}", error))
        } else {
            ExaError::Network(format!("Request failed: {}", error))
        }
    }
}

/// Exa content retrieval client
#[derive(Debug, Clone)]
pub struct ExaClient {
    client: Client,
    config: ExaConfig,
}

impl ExaClient {
    pub fn new(config: ExaConfig) -> std::result::Result<Self, ExaError> {
        config.validate().map_err(ExaError::Configuration)?;

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(config.api_key.trim())
            .map_err(|e| ExaError::Configuration(format!("Invalid API key header: {}", e)))?;
        headers.insert(HeaderName::from_static("x-api-key"), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&user_agent())
            .map_err(|e| ExaError::Configuration(format!("Invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ExaError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ExaConfig {
        &self.config
    }

    /// One `/contents` request for all of `urls`
    pub async fn get_contents(
        &self,
        urls: &[String],
    ) -> std::result::Result<ContentsResponse, ExaError> {
        let request = ContentsRequest::new(urls.to_vec(), self.config.livecrawl.clone());
        let endpoint = self.config.contents_url();
        debug!(provider = "exa", urls = ?urls, "Sending contents request");

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExaErrorMapper.map_network_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExaErrorMapper.map_http_error(status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExaErrorMapper.map_network_error(&e))?;
        let parsed: ContentsResponse = serde_json::from_str(&body)?;

        debug!(
            provider = "exa",
            results = parsed.results.len(),
            statuses = parsed.statuses.len(),
            "Contents response received"
        );
        Ok(parsed)
    }

    /// Text for a single URL
    pub async fn get_content(&self, url: &str) -> std::result::Result<String, ExaError> {
        let ids = [url.to_string()];
        let response = self.get_contents(&ids).await?;
        let content = response.outcome_for(url)?;
        debug!(provider = "exa", url, chars = content.chars().count(), "Content retrieved");
        Ok(content)
    }
}

#[async_trait]
impl ContentRetriever for ExaClient {
    async fn retrieve(&self, url: &str) -> Result<String> {
        Ok(self.get_content(url).await?)
    }
}
