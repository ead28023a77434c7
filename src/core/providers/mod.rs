//! Clients for the external services
//!
//! - [`exa`]: content retrieval (`POST /contents`)
//! - [`openrouter`]: classification via chat completions

pub mod exa;
pub mod openrouter;

pub use exa::{ExaClient, ExaConfig, ExaError};
pub use openrouter::{OpenRouterClient, OpenRouterConfig, OpenRouterError};

/// User agent sent to both services
pub fn user_agent() -> String {
    format!("link-checker/{}", env!("CARGO_PKG_VERSION"))
}
