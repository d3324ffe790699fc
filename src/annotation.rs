//! Annotations and the annotation store seam.
//!
//! The hosting pipeline owns the document's annotation index and the concept
//! lookup behind it. The engine only needs two capabilities from it:
//!
//! - [`AnnotationIndex`]: query prior annotations by concept branch and remove
//!   the ones a new finding supersedes.
//! - [`AnnotationFactory`]: materialize a new attribute annotation.
//!
//! [`DocumentIndex`] is an in-memory store implementing both, used by the CLI
//! and by tests.

use crate::{Document, Result, Span};

pub type AnnotationId = u64;

/// Semantic group of an attribute annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCategory {
    DiseaseGradeQualifier,
    Size,
}

impl AttributeCategory {
    pub fn name(&self) -> &'static str {
        match self {
            AttributeCategory::DiseaseGradeQualifier => "Disease Grade Qualifier",
            AttributeCategory::Size => "Size",
        }
    }
}

/// An annotation created by this crate. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeAnnotation {
    pub id: AnnotationId,
    /// Absolute start (start of the semantic value).
    pub start: usize,
    /// Absolute end (end of the whole match).
    pub end: usize,
    pub category: AttributeCategory,
    pub concept_id: String,
    /// Free-form payload passed through from the caller.
    pub extra: String,
    pub display_text: String,
    pub covered_text: String,
    pub confidence: f32,
}

impl AttributeAnnotation {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// An annotation that existed before extraction ran (typically from concept
/// lookup). It may be removed but is never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorAnnotation {
    pub id: AnnotationId,
    pub start: usize,
    pub end: usize,
    /// Concept branch the annotation belongs to.
    pub branch: String,
    pub concept_id: String,
    pub covered_text: String,
}

impl PriorAnnotation {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

pub trait AnnotationIndex {
    /// Prior annotations in `branch`. With `within`, only those covered by
    /// that absolute span.
    fn by_branch(&self, branch: &str, within: Option<Span>) -> Vec<PriorAnnotation>;

    /// Remove a prior annotation. Returns false if it was already gone.
    fn remove(&mut self, id: AnnotationId) -> bool;
}

pub trait AnnotationFactory {
    #[allow(clippy::too_many_arguments)]
    fn create(
        &mut self,
        document: &Document,
        start: usize,
        end: usize,
        category: AttributeCategory,
        concept_id: &str,
        extra: &str,
        display_text: &str,
    ) -> Result<AttributeAnnotation>;
}

/// Everything the extraction stages need from a document's store.
pub trait AnnotationStore: AnnotationIndex + AnnotationFactory {}

impl<T: AnnotationIndex + AnnotationFactory + ?Sized> AnnotationStore for T {}

/// In-memory annotation index for a single document.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    priors: Vec<PriorAnnotation>,
    created: Vec<AttributeAnnotation>,
    next_id: AnnotationId,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prior annotation over `span` of `document`.
    pub fn add_prior(
        &mut self,
        document: &Document,
        span: Span,
        branch: &str,
        concept_id: &str,
    ) -> Result<AnnotationId> {
        let covered_text = document.slice(span)?.to_string();
        let id = self.allocate_id();
        self.priors.push(PriorAnnotation {
            id,
            start: span.start,
            end: span.end,
            branch: branch.to_string(),
            concept_id: concept_id.to_string(),
            covered_text,
        });
        Ok(id)
    }

    /// Prior annotations still in the index, in insertion order.
    pub fn priors(&self) -> &[PriorAnnotation] {
        &self.priors
    }

    /// Annotations created through [`AnnotationFactory::create`].
    pub fn annotations(&self) -> &[AttributeAnnotation] {
        &self.created
    }

    fn allocate_id(&mut self) -> AnnotationId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AnnotationIndex for DocumentIndex {
    fn by_branch(&self, branch: &str, within: Option<Span>) -> Vec<PriorAnnotation> {
        self.priors
            .iter()
            .filter(|p| p.branch == branch)
            .filter(|p| within.is_none_or(|w| w.contains(&p.span())))
            .cloned()
            .collect()
    }

    fn remove(&mut self, id: AnnotationId) -> bool {
        let before = self.priors.len();
        self.priors.retain(|p| p.id != id);
        self.priors.len() != before
    }
}

impl AnnotationFactory for DocumentIndex {
    fn create(
        &mut self,
        document: &Document,
        start: usize,
        end: usize,
        category: AttributeCategory,
        concept_id: &str,
        extra: &str,
        display_text: &str,
    ) -> Result<AttributeAnnotation> {
        let covered_text = document.slice(Span::new(start, end))?.to_string();
        let annotation = AttributeAnnotation {
            id: self.allocate_id(),
            start,
            end,
            category,
            concept_id: concept_id.to_string(),
            extra: extra.to_string(),
            display_text: display_text.to_string(),
            covered_text,
            confidence: 1.0,
        };
        self.created.push(annotation.clone());
        Ok(annotation)
    }
}
