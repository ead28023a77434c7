//! Per-run state shared by the pipeline stages

use crate::config::Config;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Configuration, cancellation flag and progress counters for one run.
///
/// Cheap to clone; clones share the same flag and counters.
#[derive(Debug, Clone)]
pub struct RunContext {
    config: Arc<Config>,
    cancelled: Arc<AtomicBool>,
    progress: Arc<RunProgress>,
}

impl RunContext {
    pub fn new(config: Config) -> Self {
        Self::with_shared(Arc::new(config))
    }

    pub fn with_shared(config: Arc<Config>) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
            progress: Arc::new(RunProgress::default()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle that can stop the run from another task (e.g. a Ctrl-C listener)
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn progress(&self) -> &RunProgress {
        &self.progress
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Stops a run at the next group or classification boundary
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Atomic counters updated as rows move through the stages
#[derive(Debug, Default)]
pub struct RunProgress {
    total: AtomicUsize,
    retrieved: AtomicUsize,
    not_working: AtomicUsize,
    groups_completed: AtomicUsize,
    classified: AtomicUsize,
}

impl RunProgress {
    pub fn set_total(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn record_retrieval(&self, working: bool) {
        if working {
            self.retrieved.fetch_add(1, Ordering::Relaxed);
        } else {
            self.not_working.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_group(&self) {
        self.groups_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_classification(&self) {
        self.classified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total: self.total.load(Ordering::Relaxed),
            retrieved: self.retrieved.load(Ordering::Relaxed),
            not_working: self.not_working.load(Ordering::Relaxed),
            groups_completed: self.groups_completed.load(Ordering::Relaxed),
            classified: self.classified.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`RunProgress`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub total: usize,
    pub retrieved: usize,
    pub not_working: usize,
    pub groups_completed: usize,
    pub classified: usize,
}

impl ProgressSnapshot {
    /// Rows whose retrieval has finished, successfully or not
    pub fn attempted(&self) -> usize {
        self.retrieved + self.not_working
    }
}
