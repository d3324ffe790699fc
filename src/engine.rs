//! Extraction engine: from finder candidates to annotations.
//!
//! ```text
//! Document ── windows ──▶ GradeFinder / SizeFinder          (rules/)
//!                              │ Vec<MatchCandidate> (window-relative)
//!                              v
//!                         to_absolute                       (offsets.rs)
//!                              │ AbsoluteCandidate
//!                              v
//!                         AnnotationFactory::create         (store seam)
//!                              │ AttributeAnnotation
//!                              v
//!                         suppress_contained                (merge.rs)
//!                              │ Vec<PriorAnnotation>
//!                              v
//!                         AnnotationIndex::remove           (store seam)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `offsets.rs`: the only window-to-document coordinate conversion.
//! - `merge.rs`: decides which priors a new annotation supersedes.
//! - `runner.rs`: grade and size stages; sequencing, optional parallel scan,
//!   store mutation, logging.
//! - `metrics.rs`: per-stage counters and timing.
//!
//! ## Debugging
//!
//! The engine logs through `tracing`: stage starts at `info`, every created
//! annotation and suppression at `debug`, skipped candidates at `warn`.

#[path = "engine/merge.rs"]
mod merge;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/offsets.rs"]
mod offsets;
#[path = "engine/runner.rs"]
mod runner;

pub use merge::suppress_contained;
pub use metrics::{RunMetrics, StageMetrics};
pub use offsets::{AbsoluteCandidate, to_absolute};
pub(crate) use runner::{StageOutput, run_grade_stage, run_size_stage};
