//! Extraction run metrics.
//!
//! Collected on every run (the counters are cheap); surfaced through
//! [`extract_verbose_with`](crate::extract_verbose_with) and the CLI report.

use std::time::Duration;

/// Counters and timing for one stage (grade or size).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StageMetrics {
    /// Elapsed time for the stage, scanning and store mutation included.
    pub duration: Duration,
    /// Windows scanned.
    pub windows: usize,
    /// Candidates the finder produced.
    pub candidates: usize,
    /// Annotations created (candidates minus those the factory rejected).
    pub annotations: usize,
    /// Prior annotations removed because a new annotation contained them.
    pub suppressed: usize,
    /// Prior annotations removed up front (generic grading-system branch).
    pub cleared: usize,
    /// Candidates skipped because the factory failed.
    pub skipped: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    pub grade: StageMetrics,
    pub size: StageMetrics,
}
