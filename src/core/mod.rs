//! Core functionality: data model, service clients, batching and the pipeline

pub mod batch;
pub mod csv;
pub mod pipeline;
pub mod providers;
pub mod traits;
pub mod types;
