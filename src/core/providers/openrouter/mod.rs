//! OpenRouter classification client
//!
//! OpenRouter exposes an OpenAI-compatible chat completions API. Each
//! classification is a single-message completion whose answer is reduced to
//! VALID or INVALID.
//!
//! Documentation: https://openrouter.ai/docs

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod prompt;

pub use client::{OpenRouterClient, OpenRouterErrorMapper};
pub use config::OpenRouterConfig;
pub use error::OpenRouterError;
pub use models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use parser::{parse_verdict, verdict_from_text};
pub use prompt::{build_classification_prompt, truncate_content};
