use crate::engine::{self, RunMetrics, StageOutput};
use crate::{AnnotationStore, AttributeAnnotation, Document, DocumentIndex, ExtractorConfig, PriorAnnotation};
use std::time::{Duration, Instant};

bitflags::bitflags! {
    /// Which attribute stages to run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributeSet: u8 {
        const GRADE = 1 << 0;
        const SIZE  = 1 << 1;
    }
}

/// Where the size stage looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeScope {
    /// One pass over the whole document text.
    #[default]
    Document,
    /// One pass per section window.
    Sections,
}

/// Options that affect extraction.
#[derive(Debug, Clone)]
pub struct Options {
    pub attributes: AttributeSet,
    pub size_scope: SizeScope,
    /// Scan section windows on the rayon pool (`parallel` feature; ignored
    /// without it). Store mutation stays sequential.
    pub parallel: bool,
    pub config: ExtractorConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            attributes: AttributeSet::all(),
            size_scope: SizeScope::default(),
            parallel: false,
            config: ExtractorConfig::default(),
        }
    }
}

/// Result from [`extract`] and [`extract_with`].
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub document_id: String,
    /// Annotations created, grades first, each stage in document order.
    pub annotations: Vec<AttributeAnnotation>,
    /// Prior annotations removed because a new annotation contained them.
    pub suppressed: Vec<PriorAnnotation>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Additional details returned by [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractionDetails {
    pub metrics: RunMetrics,
    /// Generic grading-system annotations removed before grades were searched.
    pub cleared: Vec<PriorAnnotation>,
}

#[derive(Debug, Clone)]
pub struct ExtractionResultVerbose {
    pub result: ExtractionResult,
    pub details: ExtractionDetails,
}

/// Extract grades and sizes from `text`, treated as a single section with no
/// prior annotations.
///
/// # Example
/// ```
/// use gradesize::extract;
///
/// let out = extract("Nuclear grade 2; tumor 2.0 x 1.5 x 1.0 cm.");
/// let texts: Vec<&str> = out.annotations.iter().map(|a| a.covered_text.as_str()).collect();
/// assert_eq!(texts, ["2", "2.0 x 1.5 x 1.0 cm"]);
/// ```
pub fn extract(text: &str) -> ExtractionResult {
    let document = Document::new("", text);
    let mut store = DocumentIndex::new();
    extract_with(&document, &mut store, &Options::default())
}

/// Extract attributes from `document`, creating annotations in and suppressing
/// priors from `store`.
pub fn extract_with<S: AnnotationStore + ?Sized>(
    document: &Document,
    store: &mut S,
    options: &Options,
) -> ExtractionResult {
    extract_verbose_with(document, store, options).result
}

/// Like [`extract_with`], also returning per-stage metrics and the cleared
/// grading-system annotations.
pub fn extract_verbose_with<S: AnnotationStore + ?Sized>(
    document: &Document,
    store: &mut S,
    options: &Options,
) -> ExtractionResultVerbose {
    let started = Instant::now();
    let config = &options.config;

    let grade = if options.attributes.contains(AttributeSet::GRADE) {
        engine::run_grade_stage(document, store, config, options.parallel)
    } else {
        StageOutput::default()
    };
    let size = if options.attributes.contains(AttributeSet::SIZE) {
        engine::run_size_stage(document, store, config, options.size_scope, options.parallel)
    } else {
        StageOutput::default()
    };

    let metrics = RunMetrics { total: started.elapsed(), grade: grade.metrics, size: size.metrics };
    tracing::debug!(
        document = document.id(),
        grades = grade.annotations.len(),
        sizes = size.annotations.len(),
        elapsed = ?metrics.total,
        "Extraction finished"
    );

    let result = ExtractionResult {
        document_id: document.id().to_string(),
        annotations: grade.annotations.into_iter().chain(size.annotations).collect(),
        suppressed: grade.suppressed.into_iter().chain(size.suppressed).collect(),
        elapsed: metrics.total,
    };

    ExtractionResultVerbose { result, details: ExtractionDetails { metrics, cleared: grade.cleared } }
}
