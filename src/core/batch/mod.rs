//! Batched content retrieval
//!
//! URLs are retrieved in fixed-size groups. Every member of a group is
//! requested concurrently and the group finishes only when all of them have;
//! a fixed pause separates consecutive groups to stay under the retrieval
//! service's rate limits.

pub mod retrieval;

pub use retrieval::BatchRetriever;

use crate::config::RetrievalConfig;
use std::time::Duration;

/// Configuration for batched retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// URLs per group (default: 10)
    pub batch_size: usize,
    /// Pause after every group except the last (default: 500ms)
    pub batch_delay: Duration,
    /// Timeout per retrieval call (default: 30s)
    pub timeout: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::from_settings(&RetrievalConfig::default())
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &RetrievalConfig) -> Self {
        Self {
            batch_size: settings.batch_size.max(1),
            batch_delay: settings.batch_delay(),
            timeout: settings.timeout(),
        }
    }

    /// Set group size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set pause between groups
    pub fn with_batch_delay(mut self, batch_delay: Duration) -> Self {
        self.batch_delay = batch_delay;
        self
    }

    /// Set timeout per call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `ceil(len / batch_size)`
    pub fn group_count(&self, len: usize) -> usize {
        len.div_ceil(self.batch_size)
    }

    /// Lower bound on the total pause for `len` URLs
    pub fn minimum_delay(&self, len: usize) -> Duration {
        let pauses = self.group_count(len).saturating_sub(1) as u32;
        self.batch_delay * pauses
    }
}
