//! Per-document grade and size stages.
//!
//! Each stage has two phases:
//!
//! ```text
//! (1) scan      windows ──▶ finder ──▶ Vec<MatchCandidate> per window
//!               (pure; rayon `par_iter` with the `parallel` feature)
//! (2) apply     for each window, in document order:
//!                 priors   = store.by_branch(branch, window)
//!                 for each candidate:
//!                   to_absolute ──▶ store.create ──▶ suppress_contained ──▶ store.remove
//! ```
//!
//! Phase 2 needs `&mut` access to the document's store, so index mutation for a
//! document is always sequential even when phase 1 ran in parallel.

use super::merge::suppress_contained;
use super::metrics::StageMetrics;
use super::offsets::to_absolute;
use crate::{
    AnnotationStore, AttributeAnnotation, AttributeCategory, AttributeKind, Document, ExtractorConfig, GradeFinder,
    MatchCandidate, PriorAnnotation, SizeFinder, SizeScope, TextWindow,
};
use std::time::Instant;

/// What a stage did to the store.
#[derive(Debug, Default, Clone)]
pub(crate) struct StageOutput {
    pub annotations: Vec<AttributeAnnotation>,
    pub suppressed: Vec<PriorAnnotation>,
    pub cleared: Vec<PriorAnnotation>,
    pub metrics: StageMetrics,
}

/// Clear the generic grading-system branch, then find grades section by section.
pub(crate) fn run_grade_stage<S: AnnotationStore + ?Sized>(
    document: &Document,
    store: &mut S,
    config: &ExtractorConfig,
    parallel: bool,
) -> StageOutput {
    let started = Instant::now();
    tracing::info!(document = document.id(), "Finding grade score values");
    let mut out = StageOutput::default();

    for prior in store.by_branch(&config.grading_system_branch, None) {
        if store.remove(prior.id) {
            out.cleared.push(prior);
        }
    }

    let windows = document.windows();
    let finder = GradeFinder::new(config);
    let found = scan_windows(&windows, parallel, |w| finder.find(w));
    for (window, candidates) in windows.iter().zip(found) {
        apply(document, store, window, candidates, &config.grade_finding_branch, config, &mut out);
    }

    out.metrics.windows = windows.len();
    out.metrics.cleared = out.cleared.len();
    out.metrics.duration = started.elapsed();
    out
}

/// Find sizes over the whole document or section by section.
pub(crate) fn run_size_stage<S: AnnotationStore + ?Sized>(
    document: &Document,
    store: &mut S,
    config: &ExtractorConfig,
    scope: SizeScope,
    parallel: bool,
) -> StageOutput {
    let started = Instant::now();
    tracing::info!(document = document.id(), ?scope, "Finding sizes");
    let mut out = StageOutput::default();

    let windows = match scope {
        SizeScope::Document => vec![document.whole()],
        SizeScope::Sections => document.windows(),
    };
    let finder = SizeFinder::new();
    let found = scan_windows(&windows, parallel, |w| finder.find(w));
    for (window, candidates) in windows.iter().zip(found) {
        apply(document, store, window, candidates, &config.size_branch, config, &mut out);
    }

    out.metrics.windows = windows.len();
    out.metrics.duration = started.elapsed();
    out
}

/// Run `find` over every window, preserving window order in the output.
fn scan_windows<'d, F>(windows: &[TextWindow<'d>], parallel: bool, find: F) -> Vec<Vec<MatchCandidate>>
where
    F: Fn(&TextWindow<'d>) -> Vec<MatchCandidate> + Sync,
{
    #[cfg(feature = "parallel")]
    if parallel && windows.len() > 1 {
        use rayon::prelude::*;

        return windows.par_iter().map(&find).collect();
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    windows.iter().map(find).collect()
}

/// Materialize one window's candidates and suppress the priors they contain.
fn apply<S: AnnotationStore + ?Sized>(
    document: &Document,
    store: &mut S,
    window: &TextWindow<'_>,
    candidates: Vec<MatchCandidate>,
    branch: &str,
    config: &ExtractorConfig,
    out: &mut StageOutput,
) {
    out.metrics.candidates += candidates.len();
    if candidates.is_empty() {
        return;
    }

    let mut priors = store.by_branch(branch, Some(window.span()));

    for candidate in &candidates {
        let abs = to_absolute(window.start, candidate);
        let span = abs.annotation_span();
        let (concept_id, display_text) = labels(candidate, config);

        let annotation =
            match store.create(document, span.start, span.end, category(candidate.kind), concept_id, "", display_text) {
                Ok(annotation) => annotation,
                Err(err) => {
                    tracing::warn!(
                        document = document.id(),
                        start = span.start,
                        end = span.end,
                        error = %err,
                        "Skipping candidate, annotation could not be created"
                    );
                    out.metrics.skipped += 1;
                    continue;
                }
            };

        tracing::debug!(
            concept = %annotation.concept_id,
            start = annotation.start,
            end = annotation.end,
            text = %annotation.covered_text,
            "Created attribute annotation"
        );

        for prior in suppress_contained(&annotation, &priors) {
            if store.remove(prior.id) {
                tracing::debug!(id = prior.id, concept = %prior.concept_id, "Suppressed prior annotation");
                out.suppressed.push(prior);
            }
        }
        let covering = annotation.span();
        priors.retain(|p| !covering.contains(&p.span()));

        out.annotations.push(annotation);
    }

    out.metrics.annotations = out.annotations.len();
    out.metrics.suppressed = out.suppressed.len();
}

fn category(kind: AttributeKind) -> AttributeCategory {
    match kind {
        AttributeKind::Grade => AttributeCategory::DiseaseGradeQualifier,
        AttributeKind::Size => AttributeCategory::Size,
    }
}

/// `(concept_id, display_text)` for a candidate.
fn labels<'a>(candidate: &'a MatchCandidate, config: &'a ExtractorConfig) -> (&'a str, &'a str) {
    match candidate.kind {
        AttributeKind::Grade => (&candidate.category_key, &candidate.category_key),
        AttributeKind::Size => (&config.size_concept_id, &candidate.category_key),
    }
}
