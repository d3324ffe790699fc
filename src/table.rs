//! Mention table: one pipe-separated row per attribute annotation.
//!
//! ```text
//!  Semantic | URI | Confidence | Text | Window
//! Disease Grade Qualifier|Nuclear_Grade_Score_2|1.00|2|...nuclear grade 2 present...
//! ```
//!
//! Cell text never contains newlines, carriage returns or `|`; they are
//! replaced by spaces so a row stays on one line.

use crate::{AttributeAnnotation, Document, PriorAnnotation, Span};
use std::cmp::Ordering;
use std::io::{self, Write};

/// Column titles, padded the way the table has always been written.
pub const HEADER: [&str; 5] = [" Semantic ", " URI ", " Confidence ", " Text ", " Window "];

/// One row of the mention table.
#[derive(Debug, Clone, PartialEq)]
pub struct MentionRow {
    pub semantic: String,
    pub uri: String,
    pub confidence: f32,
    pub text: String,
    /// Covered text plus up to `edge` characters on each side.
    pub window: String,
}

impl MentionRow {
    pub fn cells(&self) -> [String; 5] {
        [
            self.semantic.clone(),
            self.uri.clone(),
            format!("{:.2}", self.confidence),
            self.text.clone(),
            self.window.clone(),
        ]
    }
}

/// Build sorted rows for `annotations` of `document`.
///
/// Rows are ordered by semantic group, then URI (both case-insensitive), then
/// by confidence, highest first. A mention whose context window cannot be
/// cut from the document is still listed, with an empty window.
pub fn mention_rows(document: &Document, annotations: &[AttributeAnnotation], edge: usize) -> Vec<MentionRow> {
    mention_rows_with_priors(document, annotations, &[], edge)
}

/// Like [`mention_rows`], also listing the prior mentions that survived
/// extraction. A prior's branch is its semantic group; priors carry no score,
/// so their confidence is `0.00`.
pub fn mention_rows_with_priors(
    document: &Document,
    annotations: &[AttributeAnnotation],
    priors: &[PriorAnnotation],
    edge: usize,
) -> Vec<MentionRow> {
    let attributes = annotations.iter().map(|annotation| {
        let window = context(document, annotation.span(), &annotation.covered_text, edge);
        MentionRow {
            semantic: annotation.category.name().to_string(),
            uri: annotation.concept_id.clone(),
            confidence: annotation.confidence,
            text: clean(&annotation.covered_text),
            window,
        }
    });
    let surviving = priors.iter().map(|prior| MentionRow {
        semantic: prior.branch.clone(),
        uri: prior.concept_id.clone(),
        confidence: 0.0,
        text: clean(&prior.covered_text),
        window: context(document, prior.span(), &prior.covered_text, edge),
    });

    let mut rows: Vec<MentionRow> = attributes.chain(surviving).collect();
    rows.sort_by(compare_rows);
    rows
}

fn context(document: &Document, span: Span, covered: &str, edge: usize) -> String {
    match document.context_window(span, edge) {
        Ok(window) => clean(window),
        Err(err) => {
            tracing::warn!(
                document = document.id(),
                text = %covered,
                error = %err,
                "Could not resolve context window for mention"
            );
            String::new()
        }
    }
}

/// Write the header and `rows`, one line each.
pub fn write_table<W: Write>(out: &mut W, rows: &[MentionRow]) -> io::Result<()> {
    writeln!(out, "{}", HEADER.join("|"))?;
    for row in rows {
        writeln!(out, "{}", row.cells().join("|"))?;
    }
    Ok(())
}

fn compare_rows(a: &MentionRow, b: &MentionRow) -> Ordering {
    a.semantic
        .to_lowercase()
        .cmp(&b.semantic.to_lowercase())
        .then_with(|| a.uri.to_lowercase().cmp(&b.uri.to_lowercase()))
        .then_with(|| b.confidence.total_cmp(&a.confidence))
}

fn clean(text: &str) -> String {
    text.replace(['\n', '\r', '|'], " ")
}
