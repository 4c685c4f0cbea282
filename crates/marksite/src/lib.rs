//! # marksite
//!
//! Convert a constrained markdown dialect to HTML.
//!
//! The dialect supports headings, paragraphs, quotes, flat lists, fenced
//! code blocks and one level of inline styling per span (bold, italic,
//! code, links, images). It is deliberately not CommonMark: no nested
//! emphasis, no tables, no HTML passthrough.
//!
//! ## Pipeline
//!
//! ```text
//! Markdown String ──segment/classify──▶ Blocks ──build──▶ Element Tree ──serialize──▶ HTML String
//!                                                  │
//!                                         tokenize inline text
//! ```
//!
//! ## Example
//!
//! ```rust
//! use marksite::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n\nSome **bold** text.").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>");
//! ```

pub mod block;
pub mod builder;
pub mod inline;

pub use block::{classify, segment, BlockType};
pub use builder::{build, extract_title};
pub use inline::{tokenize, TextSpan};
pub use marksite_core::{serialize, Element, RenderError};

/// Error type for document conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The document has no level-1 heading to take a title from.
    #[error("document has no level-1 heading")]
    NoTitle,

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert a whole markdown document to its HTML string.
pub fn markdown_to_html(document: &str) -> Result<String> {
    Ok(serialize(&build(document))?)
}
