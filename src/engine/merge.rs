//! Suppression of prior annotations superseded by a new attribute annotation.
//!
//! A prior concept annotation (say a generic "grade" finding) that lies inside
//! a pattern-confirmed attribute annotation is redundant. The rule:
//!
//! ```text
//! new annotation:      [value_start ............ match_end]
//! prior (suppressed):       [start ..... end]
//! prior (kept):     [start ....................... end]
//! ```
//!
//! `prior.start >= new.start && prior.end <= new.end`, where the new
//! annotation spans value start to match end. Edges count as inside.
//!
//! This module only decides; the runner removes the returned priors from the
//! store. Callers pass priors already scoped to the relevant concept branch.

use crate::{AttributeAnnotation, PriorAnnotation};

/// Priors whose span is fully contained in `annotation`'s span.
pub fn suppress_contained(annotation: &AttributeAnnotation, priors: &[PriorAnnotation]) -> Vec<PriorAnnotation> {
    let span = annotation.span();
    priors.iter().filter(|prior| span.contains(&prior.span())).cloned().collect()
}
