//! html5ever front end producing a [`MarkupNode`] tree.

use crate::node::{MarkupNode, NodeKind};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::borrow::Cow;

/// A parsed HTML fragment.
pub struct HtmlFragment {
    dom: RcDom,
}

impl HtmlFragment {
    /// The `<body>` element the fragment was placed in, or the document node
    /// when the parser produced no body.
    pub fn root(&self) -> Handle {
        find_element(&self.dom.document, "body").unwrap_or_else(|| self.dom.document.clone())
    }
}

impl std::fmt::Debug for HtmlFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlFragment").finish_non_exhaustive()
    }
}

/// Parses an HTML fragment. Malformed input is repaired by the parser, never
/// rejected.
pub fn parse_fragment(html: &str) -> HtmlFragment {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{}</body></html>", html);
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .one(wrapped.as_bytes());
    HtmlFragment { dom }
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == tag {
            return Some(handle.clone());
        }
    }
    handle.children.borrow().iter().find_map(|child| find_element(child, tag))
}

impl MarkupNode for Handle {
    fn kind(&self) -> NodeKind {
        match &self.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<Cow<'_, str>> {
        match &self.data {
            NodeData::Element { name, .. } => Some(Cow::Borrowed(&*name.local)),
            _ => None,
        }
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        match &self.data {
            NodeData::Text { contents } => Some(Cow::Owned(contents.borrow().to_string())),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Handle> {
        self.children.borrow().clone()
    }
}
