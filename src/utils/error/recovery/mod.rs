//! Recovery patterns for calls to external services

pub mod resilience;
pub mod retry;
pub mod types;

pub use resilience::TimeoutWrapper;
pub use retry::RetryPolicy;
pub use types::RetryConfig;
