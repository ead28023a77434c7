//! Seams between the pipeline and the external services

pub mod classifier;
pub mod error_mapper;
pub mod retriever;

pub use classifier::Classifier;
pub use error_mapper::ErrorMapper;
pub use retriever::ContentRetriever;
