//! Unformatted text extraction.
//!
//! Each node type yields its own text and delegates to its children, so the
//! traversal needs no central type switch.

use crate::block::{Chart, ContentNode, Image, Paragraph, TextFrame};
use crate::document::{Document, HeaderFooter, Section};
use crate::table::{Cell, Row, Table};
use crate::text::{FormattedText, Footnote, Hyperlink, Inline, Text};

/// Concatenates the text of a node and all of its descendants.
///
/// Symbol characters contribute their fixed Unicode scalar. No separators are
/// inserted between paragraphs, cells or sections.
pub trait PlainText {
    fn write_plain_text(&self, out: &mut String);

    fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }
}

impl<T: PlainText> PlainText for [T] {
    fn write_plain_text(&self, out: &mut String) {
        for item in self {
            item.write_plain_text(out);
        }
    }
}

impl<T: PlainText> PlainText for Vec<T> {
    fn write_plain_text(&self, out: &mut String) {
        self.as_slice().write_plain_text(out);
    }
}

impl PlainText for Text {
    fn write_plain_text(&self, out: &mut String) {
        out.push_str(&self.content);
    }
}

impl PlainText for Inline {
    fn write_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) => text.write_plain_text(out),
            Inline::Character { symbol } => out.push(symbol.to_char()),
            Inline::Formatted(run) => run.write_plain_text(out),
            Inline::Hyperlink(link) => link.write_plain_text(out),
            Inline::Footnote(note) => note.write_plain_text(out),
        }
    }
}

impl PlainText for FormattedText {
    fn write_plain_text(&self, out: &mut String) {
        self.children.write_plain_text(out);
    }
}

impl PlainText for Hyperlink {
    fn write_plain_text(&self, out: &mut String) {
        self.children.write_plain_text(out);
    }
}

impl PlainText for Footnote {
    fn write_plain_text(&self, out: &mut String) {
        self.elements.write_plain_text(out);
    }
}

impl PlainText for Paragraph {
    fn write_plain_text(&self, out: &mut String) {
        self.children.write_plain_text(out);
    }
}

impl PlainText for ContentNode {
    fn write_plain_text(&self, out: &mut String) {
        match self {
            ContentNode::Paragraph(p) => p.write_plain_text(out),
            ContentNode::Table(t) => t.write_plain_text(out),
            ContentNode::Image(i) => i.write_plain_text(out),
            ContentNode::Chart(c) => c.write_plain_text(out),
            ContentNode::TextFrame(f) => f.write_plain_text(out),
        }
    }
}

impl PlainText for Image {
    fn write_plain_text(&self, _out: &mut String) {}
}

impl PlainText for Chart {
    fn write_plain_text(&self, _out: &mut String) {}
}

impl PlainText for TextFrame {
    fn write_plain_text(&self, out: &mut String) {
        self.elements.write_plain_text(out);
    }
}

impl PlainText for Cell {
    fn write_plain_text(&self, out: &mut String) {
        self.elements.write_plain_text(out);
    }
}

impl PlainText for Row {
    fn write_plain_text(&self, out: &mut String) {
        self.cells.write_plain_text(out);
    }
}

impl PlainText for Table {
    fn write_plain_text(&self, out: &mut String) {
        self.rows.write_plain_text(out);
    }
}

impl PlainText for HeaderFooter {
    fn write_plain_text(&self, out: &mut String) {
        self.elements.write_plain_text(out);
    }
}

/// Body elements only; headers and footers are extracted separately.
impl PlainText for Section {
    fn write_plain_text(&self, out: &mut String) {
        self.elements.write_plain_text(out);
    }
}

impl PlainText for Document {
    fn write_plain_text(&self, out: &mut String) {
        self.sections.write_plain_text(out);
    }
}
