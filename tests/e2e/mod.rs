//! End-to-end tests for link-checker
//!
//! These tests call the real services and require API keys.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - EXA_API_KEY
//! - OPENROUTER_API_KEY
