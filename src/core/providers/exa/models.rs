//! Exa `/contents` request and response bodies

use super::error::ExaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentsRequest {
    /// URLs to fetch
    pub ids: Vec<String>,
    /// Ask for extracted page text
    pub text: bool,
    pub livecrawl: String,
}

impl ContentsRequest {
    pub fn new(ids: Vec<String>, livecrawl: impl Into<String>) -> Self {
        Self {
            ids,
            text: true,
            livecrawl: livecrawl.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentsResponse {
    #[serde(default)]
    pub results: Vec<ContentResult>,
    #[serde(default)]
    pub statuses: Vec<ContentStatus>,
    #[serde(default, rename = "requestId")]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentResult {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentStatus {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub error: Option<ContentStatusError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentStatusError {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default, rename = "httpStatusCode")]
    pub http_status_code: Option<u16>,
}

impl ContentsResponse {
    /// Resolve one requested URL.
    ///
    /// An entry in `results` wins over `statuses`; text that is blank counts
    /// as a failure.
    pub fn outcome_for(&self, url: &str) -> Result<String, ExaError> {
        if let Some(result) = self
            .results
            .iter()
            .find(|r| r.id == url || r.url.as_deref() == Some(url))
        {
            return match result.text.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => Ok(text.to_string()),
                _ => Err(ExaError::EmptyContent(url.to_string())),
            };
        }

        if let Some(status) = self
            .statuses
            .iter()
            .find(|s| s.id == url && s.status.eq_ignore_ascii_case("error"))
        {
            let reason = status
                .error
                .as_ref()
                .and_then(|e| e.tag.clone())
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ExaError::ContentUnavailable {
                url: url.to_string(),
                reason,
            });
        }

        Err(ExaError::MissingResult(url.to_string()))
    }

    /// Outcomes for every requested URL, in request order
    pub fn outcomes(&self, urls: &[String]) -> Vec<(String, Result<String, ExaError>)> {
        urls.iter()
            .map(|url| (url.clone(), self.outcome_for(url)))
            .collect()
    }
}
