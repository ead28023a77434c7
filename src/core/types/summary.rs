//! Run summary and report

use super::rows::ResultRow;
use super::verdict::Verdict;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Counts and timing for one run.
///
/// `valid + invalid + error + not_working == total`; rows whose page could not
/// be retrieved are counted only in `not_working`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub error: usize,
    pub not_working: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// The run was interrupted before every row was processed
    pub cancelled: bool,
}

impl RunSummary {
    /// Tally rows in a single pass
    pub fn from_rows(
        rows: &[ResultRow],
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let mut summary = Self {
            total: rows.len(),
            valid: 0,
            invalid: 0,
            error: 0,
            not_working: 0,
            started_at,
            finished_at,
            cancelled: false,
        };

        for row in rows {
            if !row.website_working {
                summary.not_working += 1;
                continue;
            }
            match row.result {
                Some(Verdict::Valid) => summary.valid += 1,
                Some(Verdict::Invalid) => summary.invalid += 1,
                // A working row is always classified; a missing verdict is a failed one.
                Some(Verdict::Error) | None => summary.error += 1,
            }
        }

        summary
    }

    pub fn with_cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Rows that reached the classifier
    pub fn classified(&self) -> usize {
        self.valid + self.invalid + self.error
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = self.duration();
        let millis = duration.num_milliseconds().max(0);

        writeln!(f, "Processing Time:")?;
        writeln!(f, "  Start Time: {}", self.started_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "  End Time:   {}", self.finished_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "  Duration:   {}.{:03}s", millis / 1000, millis % 1000)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "  Total URLs:           {}", self.total)?;
        writeln!(f, "  Valid Associations:   {}", self.valid)?;
        writeln!(f, "  Invalid Associations: {}", self.invalid)?;
        writeln!(f, "  Errors:               {}", self.error)?;
        write!(f, "  Websites Not Working: {}", self.not_working)?;
        if self.cancelled {
            write!(f, "\n  Run was cancelled before all rows were processed")?;
        }
        Ok(())
    }
}

/// Rows in input order plus their summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub rows: Vec<ResultRow>,
    pub summary: RunSummary,
}
