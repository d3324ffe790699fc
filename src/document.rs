//! Documents and the text windows scanned by the finders.
//!
//! Offsets are byte offsets into the document text. Section spans come from
//! the hosting pipeline; this crate never segments text itself.

use crate::{Error, Result, Span};

/// A document's text plus the section spans the pipeline found in it.
#[derive(Debug, Clone)]
pub struct Document {
    id: String,
    text: String,
    sections: Vec<Span>,
}

/// A contiguous, read-only span of a document.
///
/// `start`/`end` are absolute; `text` is exactly `document[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWindow<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

impl<'a> TextWindow<'a> {
    /// Window over `text` whose first byte sits at absolute offset `start`.
    pub fn new(start: usize, text: &'a str) -> Self {
        TextWindow { start, end: start + text.len(), text }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Document {
    /// A document with no sections; [`Document::windows`] yields the whole text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Document { id: id.into(), text: text.into(), sections: Vec::new() }
    }

    /// Attach section spans, rejecting any that cannot be sliced.
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = Span>) -> Result<Self> {
        let sections: Vec<Span> = sections.into_iter().collect();
        for span in &sections {
            self.slice(*span)?;
        }
        self.sections = sections;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sections(&self) -> &[Span] {
        &self.sections
    }

    /// Window over the entire document.
    pub fn whole(&self) -> TextWindow<'_> {
        TextWindow::new(0, &self.text)
    }

    /// Section windows in document order, or the whole document when no
    /// sections were attached.
    pub fn windows(&self) -> Vec<TextWindow<'_>> {
        if self.sections.is_empty() {
            return vec![self.whole()];
        }
        // Spans were validated in `with_sections`.
        self.sections.iter().filter_map(|span| self.window(*span).ok()).collect()
    }

    pub fn window(&self, span: Span) -> Result<TextWindow<'_>> {
        Ok(TextWindow::new(span.start, self.slice(span)?))
    }

    /// Text covered by an absolute span.
    pub fn slice(&self, span: Span) -> Result<&str> {
        if span.end < span.start {
            return Err(Error::InvalidSpan { start: span.start, end: span.end });
        }
        if span.end > self.text.len() {
            return Err(Error::SpanOutOfBounds { start: span.start, end: span.end, len: self.text.len() });
        }
        for offset in [span.start, span.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(Error::NotCharBoundary(offset));
            }
        }
        Ok(&self.text[span.start..span.end])
    }

    /// `span` widened by `edge` characters on both sides, clamped to the text.
    ///
    /// The span itself must be valid; the widened edges are moved onto
    /// character boundaries.
    pub fn context_window(&self, span: Span, edge: usize) -> Result<&str> {
        self.slice(span)?;
        let before = &self.text[..span.start];
        let start = before.char_indices().rev().take(edge).last().map_or(span.start, |(i, _)| i);
        let after = &self.text[span.end..];
        let end = after.char_indices().nth(edge).map_or(self.text.len(), |(i, _)| span.end + i);
        Ok(&self.text[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_default_to_whole_document() {
        let doc = Document::new("d1", "Nuclear grade 2");
        let windows = doc.windows();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, 0);
        assert_eq!(windows[0].end, 15);
        assert_eq!(windows[0].text, "Nuclear grade 2");
    }

    #[test]
    fn section_windows_carry_absolute_offsets() {
        let doc = Document::new("d1", "HISTORY: none. DIAGNOSIS: grade 3.")
            .with_sections([Span::new(0, 14), Span::new(15, 34)])
            .unwrap();
        let windows = doc.windows();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].start, 15);
        assert_eq!(windows[1].text, "DIAGNOSIS: grade 3.");
    }

    #[test]
    fn rejects_unsliceable_sections() {
        let doc = Document::new("d1", "short");
        assert!(matches!(doc.clone().with_sections([Span::new(0, 9)]), Err(Error::SpanOutOfBounds { .. })));
        assert!(matches!(doc.with_sections([Span::new(4, 2)]), Err(Error::InvalidSpan { .. })));

        let doc = Document::new("d2", "tumör");
        assert!(matches!(doc.with_sections([Span::new(0, 4)]), Err(Error::NotCharBoundary(4))));
    }

    #[test]
    fn context_window_clamps_to_text() {
        let doc = Document::new("d1", "abc 2 cm xyz");
        assert_eq!(doc.context_window(Span::new(4, 8), 2).unwrap(), "c 2 cm x");
        assert_eq!(doc.context_window(Span::new(4, 8), 40).unwrap(), "abc 2 cm xyz");
    }

    #[test]
    fn context_window_counts_characters() {
        let doc = Document::new("d1", "éé 2 cm éé");
        let span = Span::new(5, 9);
        assert_eq!(doc.slice(span).unwrap(), "2 cm");
        assert_eq!(doc.context_window(span, 2).unwrap(), "é 2 cm é");
    }
}
