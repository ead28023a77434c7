//! Error handling utilities
//!
//! Crate-wide error type plus the retry and timeout helpers used around
//! calls to the external services.

pub mod recovery;
pub mod types;

pub use recovery::*;
pub use types::{LinkCheckError, Result};
