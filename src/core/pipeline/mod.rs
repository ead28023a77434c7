//! Run orchestration
//!
//! Loader output flows through batched retrieval, then per-row
//! classification, then aggregation into a [`RunReport`](crate::core::types::RunReport).
//! All per-run state lives in an explicit [`RunContext`].

mod context;
mod runner;


pub use context::{CancelHandle, ProgressSnapshot, RunContext, RunProgress};
pub use runner::Pipeline;
