//! Document views
//!
//! The annotation pipeline runs in two rendering contexts over the same
//! matching logic: a live, cursor-aware source view backed by the markdown
//! structure (`source`), and a static rendered view backed by an element
//! tree (`markup`).

pub mod markup;
pub mod source;

pub use markup::{tree_from_markdown, Element, MarkupNode};
pub use source::{NodeKind, Selection, SourceNode, SourceView};

use pulldown_cmark::Options;

/// Markdown extensions both views parse with
pub(crate) fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_GFM
}
