//! Data model shared by every pipeline stage

pub mod rows;
pub mod summary;
pub mod verdict;

pub use rows::{ClassificationResult, InputRow, ResultRow, RetrievalResult};
pub use summary::{RunReport, RunSummary};
pub use verdict::Verdict;
