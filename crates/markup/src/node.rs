use std::borrow::Cow;

/// The kinds of markup node the converter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A tree root with no tag of its own.
    Document,
    Element,
    Text,
    /// Comments, doctypes and processing instructions; skipped.
    Other,
}

/// Read access to a parsed markup tree.
///
/// Tag names are compared case-insensitively and text is already entity
/// decoded. Children are returned in document order.
pub trait MarkupNode: Sized {
    fn kind(&self) -> NodeKind;

    /// The element name, `None` for anything but elements.
    fn tag_name(&self) -> Option<Cow<'_, str>>;

    /// The text content, `None` for anything but text nodes.
    fn text(&self) -> Option<Cow<'_, str>>;

    fn children(&self) -> Vec<Self>;
}

/// An owned markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Document(Vec<Markup>),
    Element { tag: String, children: Vec<Markup> },
    Text(String),
}

impl Markup {
    pub fn element(tag: impl Into<String>, children: Vec<Markup>) -> Self {
        Markup::Element {
            tag: tag.into(),
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Markup::Text(content.into())
    }
}

impl<'a> MarkupNode for &'a Markup {
    fn kind(&self) -> NodeKind {
        match self {
            Markup::Document(_) => NodeKind::Document,
            Markup::Element { .. } => NodeKind::Element,
            Markup::Text(_) => NodeKind::Text,
        }
    }

    fn tag_name(&self) -> Option<Cow<'_, str>> {
        match self {
            Markup::Element { tag, .. } => Some(Cow::Borrowed(tag.as_str())),
            _ => None,
        }
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Markup::Text(content) => Some(Cow::Borrowed(content.as_str())),
            _ => None,
        }
    }

    fn children(&self) -> Vec<&'a Markup> {
        match *self {
            Markup::Document(children) | Markup::Element { children, .. } => children.iter().collect(),
            Markup::Text(_) => Vec::new(),
        }
    }
}
