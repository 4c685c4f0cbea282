//! marksite-core - HTML element tree and serialization
//!
//! This crate provides the output data model for marksite: a tree of HTML
//! elements built by the converter and rendered to a markup string.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──convert──▶ ┌──────────────┐
//!                              │              │
//!                              │ Element Tree │ ──▶ HTML String
//!                              │              │
//!                              └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use marksite_core::{serialize, Element};
//!
//! let tree = Element::container(
//!     "div",
//!     vec![
//!         Element::container("h1", vec![Element::text("Hello World")]),
//!         Element::container(
//!             "p",
//!             vec![
//!                 Element::text("This is "),
//!                 Element::leaf("b", "bold"),
//!                 Element::text(" text."),
//!             ],
//!         ),
//!     ],
//! );
//!
//! let html = serialize(&tree).unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Hello World</h1><p>This is <b>bold</b> text.</p></div>"
//! );
//! ```

mod element;
mod serialize;

pub use element::{Attrs, Element};
pub use serialize::serialize;

/// Error type for element tree rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf element has no value")]
    MissingValue,

    #[error("container element has no tag")]
    MissingTag,

    #[error("container element has no children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, RenderError>;
