//! Attribute rules: the pattern library and the two finders built on it.
//!
//! ```text
//! patterns.rs ──▶ grade.rs  (GradeFinder: truncation + COMMENTS cutoff)
//!             └─▶ size.rs   (SizeFinder: longest tier first)
//! ```
//!
//! Finders are pure: they read a [`TextWindow`](crate::TextWindow) and return
//! window-relative [`MatchCandidate`](crate::MatchCandidate)s. Turning those into
//! annotations is the engine's job.

#[path = "rules/grade.rs"]
mod grade;
#[path = "rules/patterns.rs"]
pub(crate) mod patterns;
#[path = "rules/size.rs"]
mod size;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

pub use grade::{GradeFinder, grade_concept_id};
pub use size::SizeFinder;
