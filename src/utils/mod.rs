//! Shared utilities: error handling, recovery helpers and logging setup

pub mod error;
pub mod logging;
