//! Error types for gradesize.
//!
//! Finders never fail: empty or degenerate text is an empty result. Errors only
//! come from addressing document text (spans handed in by the caller) and from
//! the CLI surface.

use thiserror::Error;

/// Result type for gradesize operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Span reaches past the end of the document.
    #[error("span {start}..{end} is outside a document of {len} bytes")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    /// Span end precedes its start.
    #[error("span {start}..{end} ends before it starts")]
    InvalidSpan { start: usize, end: usize },

    /// Offset splits a multi-byte character.
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
