//! Exa content retrieval
//!
//! Exa fetches a page live and returns its extracted text. One request may
//! carry several URLs in `ids`; every URL gets either an entry in `results`
//! or an `error` entry in `statuses`.
//!
//! Documentation: https://docs.exa.ai/reference/get-contents

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ExaClient, ExaErrorMapper};
pub use config::ExaConfig;
pub use error::ExaError;
pub use models::{ContentResult, ContentStatus, ContentsRequest, ContentsResponse};
