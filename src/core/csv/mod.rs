//! CSV input and output

pub mod loader;
pub mod writer;

pub use loader::{CsvLoader, REQUIRED_COLUMNS};
pub use writer::{OUTPUT_COLUMNS, results_to_string, write_results, write_results_path};
