//! Markup to rich-text conversion.
//!
//! The input boundary is the [`MarkupNode`] trait: anything that can report a
//! node kind, a tag name, decoded text and ordered children can be converted.
//! [`parse_fragment`] supplies such a tree from an HTML string via html5ever,
//! and [`Markup`] is an owned tree for callers that build markup directly.
//!
//! The [`StyledTextBuilder`] walks the tree depth-first and produces folio
//! content nodes. [`AddMarkup`] attaches the result at one of three insertion
//! points: a section, a paragraph or an existing styled run.

mod builder;
mod html;
mod insert;
mod node;

pub use builder::{StyledTextBuilder, TagKind};
pub use html::{parse_fragment, HtmlFragment};
pub use insert::AddMarkup;
pub use node::{Markup, MarkupNode, NodeKind};
