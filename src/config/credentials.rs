//! API credentials
//!
//! Both keys come from the process environment only (a `.env` file is loaded
//! into the environment by the CLI). They are never read from the YAML file.

use crate::utils::error::{LinkCheckError, Result};
use std::fmt;

/// Environment variable holding the content retrieval key
pub const EXA_API_KEY_VAR: &str = "EXA_API_KEY";
/// Environment variable holding the classification key
pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Credentials for the two external services
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    exa_api_key: String,
    openrouter_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("exa_api_key", &"<redacted>")
            .field("openrouter_api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(exa_api_key: impl Into<String>, openrouter_api_key: impl Into<String>) -> Self {
        Self {
            exa_api_key: exa_api_key.into(),
            openrouter_api_key: openrouter_api_key.into(),
        }
    }

    /// Read both keys from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read both keys through `lookup`; every missing key is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let exa = read(EXA_API_KEY_VAR);
        let openrouter = read(OPENROUTER_API_KEY_VAR);

        match (exa, openrouter) {
            (Some(exa), Some(openrouter)) => Ok(Self::new(exa, openrouter)),
            (exa, openrouter) => {
                let mut missing = Vec::new();
                if exa.is_none() {
                    missing.push(EXA_API_KEY_VAR);
                }
                if openrouter.is_none() {
                    missing.push(OPENROUTER_API_KEY_VAR);
                }
                Err(LinkCheckError::config(format!(
                    "Missing API keys: {}. Set them in the environment or a .env file",
                    missing.join(", ")
                )))
            }
        }
    }

    pub fn exa_api_key(&self) -> &str {
        &self.exa_api_key
    }

    pub fn openrouter_api_key(&self) -> &str {
        &self.openrouter_api_key
    }
}
