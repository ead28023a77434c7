//! OpenRouter HTTP client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::{debug, error};

use crate::core::providers::user_agent;
use crate::core::traits::{Classifier, ErrorMapper};
use crate::core::types::Verdict;
use crate::utils::error::Result;

use super::config::OpenRouterConfig;
use super::error::OpenRouterError;
use super::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use super::parser::parse_verdict;
use super::prompt::{CONNECTION_CHECK_PROMPT, build_classification_prompt};

/// OpenRouter-specific error mapper implementation
#[derive(Debug)]
pub struct OpenRouterErrorMapper;

impl ErrorMapper<OpenRouterError> for OpenRouterErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> OpenRouterError {
        match status_code {
            400 => OpenRouterError::InvalidRequest(format!("Bad request: {}", response_body)),
            401 => OpenRouterError::Authentication("Invalid API key".to_string()),
            403 => {
                OpenRouterError::Authentication("Forbidden: insufficient permissions".to_string())
            }
            404 => OpenRouterError::UnsupportedModel("Model not found".to_string()),
            429 => OpenRouterError::RateLimit("Rate limit exceeded".to_string()),
            500 => OpenRouterError::ApiError {
                status_code: 500,
                message: "Internal server error".to_string(),
            },
            502 => OpenRouterError::Network("Bad gateway".to_string()),
            503 => OpenRouterError::Network("Service unavailable".to_string()),
            _ => OpenRouterError::ApiError {
                status_code,
                message: format!("HTTP error {}: {}", status_code, response_body),
            },
        }
    }

    fn map_network_error(&self, error: &reqwest::Error) -> OpenRouterError {
        if error.is_timeout() {
            OpenRouterError::Timeout(format!("Request timed out: {}", error))
        } else {
            OpenRouterError::Network(format!("Network error: {}", error))
        }
    }
}

/// OpenRouter chat completions client
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> std::result::Result<Self, OpenRouterError> {
        config
            .validate()
            .map_err(OpenRouterError::Configuration)?;

        let mut header_map = HeaderMap::new();
        for (key, value) in config.get_headers() {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                OpenRouterError::Configuration(format!("Invalid header key '{}': {}", key, e))
            })?;
            let header_value = HeaderValue::from_str(value.trim()).map_err(|e| {
                error!(
                    provider = "openrouter",
                    header_key = %key,
                    error = %e,
                    "Failed to parse HTTP header value"
                );
                OpenRouterError::Configuration(format!("Invalid header value for '{}': {}", key, e))
            })?;
            header_map.insert(header_name, header_value);
        }
        let agent = HeaderValue::from_str(&user_agent())
            .map_err(|e| OpenRouterError::Configuration(format!("Invalid user agent: {}", e)))?;
        header_map.insert(USER_AGENT, agent);

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(header_map)
            .build()
            .map_err(|e| {
                OpenRouterError::Network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    fn request_for(&self, prompt: String) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
        }
    }

    /// Send a single-message completion
    pub async fn chat(
        &self,
        prompt: String,
    ) -> std::result::Result<ChatCompletionResponse, OpenRouterError> {
        let request = self.request_for(prompt);
        let endpoint = self.config.completions_url();
        debug!(provider = "openrouter", model = %request.model, "Sending chat completion");

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenRouterErrorMapper.map_network_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenRouterErrorMapper.map_http_error(status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| OpenRouterErrorMapper.map_network_error(&e))?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    /// Ask the model whether `content` belongs to `business_name`
    pub async fn classify_business(
        &self,
        business_name: &str,
        content: &str,
    ) -> std::result::Result<Verdict, OpenRouterError> {
        let prompt =
            build_classification_prompt(business_name, content, self.config.max_content_chars);
        let response = self.chat(prompt).await?;
        let verdict = parse_verdict(&response)?;
        debug!(provider = "openrouter", business_name, verdict = %verdict, "Classified");
        Ok(verdict)
    }

    /// True when the service answers a trivial prompt with at least one choice
    pub async fn test_connection(&self) -> bool {
        match self.chat(CONNECTION_CHECK_PROMPT.to_string()).await {
            Ok(response) => !response.choices.is_empty(),
            Err(e) => {
                debug!(provider = "openrouter", error = %e, "Connection check failed");
                false
            }
        }
    }
}

#[async_trait]
impl Classifier for OpenRouterClient {
    async fn classify(&self, business_name: &str, content: &str) -> Result<Verdict> {
        Ok(self.classify_business(business_name, content).await?)
    }
}
