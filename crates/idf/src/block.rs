//! Block-level content: paragraphs, tables, images, charts and text frames.

use crate::table::Table;
use crate::text::{FormattedText, Hyperlink, Inline, InlineContainer, StyledSpan, Text, styled_spans};
use folio_style::StyleName;
use serde::Serialize;

/// Represents a block-level element inside a section, cell or frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    Paragraph(Paragraph),
    Table(Table),
    Image(Image),
    Chart(Chart),
    TextFrame(TextFrame),
}

impl ContentNode {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            ContentNode::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self {
            ContentNode::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ContentNode::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentNode::Paragraph(_) => "paragraph",
            ContentNode::Table(_) => "table",
            ContentNode::Image(_) => "image",
            ContentNode::Chart(_) => "chart",
            ContentNode::TextFrame(_) => "text-frame",
        }
    }
}

impl From<Paragraph> for ContentNode {
    fn from(p: Paragraph) -> Self {
        ContentNode::Paragraph(p)
    }
}

impl From<Table> for ContentNode {
    fn from(t: Table) -> Self {
        ContentNode::Table(t)
    }
}

impl From<Image> for ContentNode {
    fn from(i: Image) -> Self {
        ContentNode::Image(i)
    }
}

impl From<Chart> for ContentNode {
    fn from(c: Chart) -> Self {
        ContentNode::Chart(c)
    }
}

impl From<TextFrame> for ContentNode {
    fn from(f: TextFrame) -> Self {
        ContentNode::TextFrame(f)
    }
}

/// A paragraph: a styled block holding only inline content.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Paragraph {
    pub style: StyleName,
    /// Anchor id other content can link to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Nesting depth for outline-like paragraphs such as contents entries.
    #[serde(skip_serializing_if = "is_zero")]
    pub indent: u8,
    pub children: Vec<Inline>,
}

fn is_zero(n: &u8) -> bool {
    *n == 0
}

impl Paragraph {
    /// Creates an empty paragraph in the body style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: StyleName) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Creates a paragraph holding a single text run.
    pub fn from_text(content: impl Into<String>, style: StyleName) -> Self {
        let mut p = Self::with_style(style);
        p.add_text(content);
        p
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.add_text(content);
        self
    }

    pub fn child(mut self, inline: impl Into<Inline>) -> Self {
        self.push_inline(inline);
        self
    }

    pub fn add_formatted(&mut self, run: FormattedText) -> &mut Self {
        self.push_inline(run)
    }

    pub fn add_hyperlink(&mut self, link: Hyperlink) -> &mut Self {
        self.push_inline(link)
    }

    /// Replaces all inline content with a single text run.
    pub fn set_text(&mut self, content: impl Into<String>) {
        self.children.clear();
        self.children.push(Inline::Text(Text::new(content)));
    }

    /// The heading level (1..=6) if the paragraph is styled as a heading.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level()
    }

    pub fn is_heading(&self) -> bool {
        self.style.is_heading()
    }

    pub fn spans(&self) -> Vec<StyledSpan> {
        styled_spans(&self.children)
    }
}

impl InlineContainer for Paragraph {
    fn inlines(&self) -> &[Inline] {
        &self.children
    }

    fn inlines_mut(&mut self) -> &mut Vec<Inline> {
        &mut self.children
    }
}

/// A reference to an image resource; fetching is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Image {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    #[default]
    Column,
    Bar,
    Line,
    Area,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Chart data; drawing it is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub series: Vec<ChartSeries>,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn series(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.series.push(ChartSeries {
            name: name.into(),
            values,
        });
        self
    }
}

/// A positioned box holding block content.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextFrame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    pub elements: Vec<ContentNode>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<ContentNode>) -> Self {
        self.elements.push(node.into());
        self
    }
}
