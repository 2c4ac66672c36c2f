use folio_idf::{ContentNode, Document, Paragraph, Section, SectionRole, StyleName, Table};
use folio_markup::AddMarkup;
use std::fmt::Debug;

/// A self-contained unit of document content.
///
/// Emission appends new nodes every time it runs, so a part must be emitted
/// at most once into any given document.
pub trait DocumentPart: Debug {
    /// Appends the part's content to an existing section.
    fn emit_into(&self, section: &mut Section);

    /// Appends the part to `document` in a section of its own.
    fn emit(&self, document: &mut Document) {
        let section = document.add_section(Section::new(self.role()));
        self.emit_into(section);
    }

    /// The role recorded on sections this part creates.
    fn role(&self) -> SectionRole {
        SectionRole::Content
    }
}

impl<P: DocumentPart + ?Sized> DocumentPart for Box<P> {
    fn emit_into(&self, section: &mut Section) {
        (**self).emit_into(section);
    }

    fn emit(&self, document: &mut Document) {
        (**self).emit(document);
    }

    fn role(&self) -> SectionRole {
        (**self).role()
    }
}

#[derive(Debug, Clone)]
enum Block {
    Node(ContentNode),
    Html(String),
}

/// A generic part holding ready-made nodes, markup and nested parts.
///
/// Markup is kept as source and converted each time the part is emitted.
#[derive(Debug, Default)]
pub struct ContentPart {
    blocks: Vec<Block>,
    children: Vec<Box<dyn DocumentPart>>,
}

impl ContentPart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: impl Into<ContentNode>) -> &mut Self {
        self.blocks.push(Block::Node(node.into()));
        self
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>, style: StyleName) -> &mut Self {
        self.add_node(Paragraph::from_text(text, style))
    }

    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.add_node(table)
    }

    pub fn add_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Html(html.into()));
        self
    }

    /// Adds a nested part, emitted after this part's own blocks.
    pub fn add_part(&mut self, part: impl DocumentPart + 'static) -> &mut Self {
        self.children.push(Box::new(part));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.children.is_empty()
    }
}

impl DocumentPart for ContentPart {
    fn emit_into(&self, section: &mut Section) {
        for block in &self.blocks {
            match block {
                Block::Node(node) => {
                    section.add(node.clone());
                }
                Block::Html(html) => {
                    section.add_html(html);
                }
            }
        }
        for child in &self.children {
            child.emit_into(section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::PlainText;

    #[test]
    fn test_content_part_keeps_insertion_order() {
        let mut inner = ContentPart::new();
        inner.add_paragraph("c", StyleName::Normal);

        let mut part = ContentPart::new();
        part.add_paragraph("a", StyleName::Normal)
            .add_html("<h2>b</h2>")
            .add_part(inner);

        let mut section = Section::new(SectionRole::Content);
        part.emit_into(&mut section);
        assert_eq!(section.plain_text(), "abc");
        assert_eq!(section.headings().count(), 1);
    }

    #[test]
    fn test_emit_creates_content_section() {
        let mut part = ContentPart::new();
        part.add_paragraph("x", StyleName::Normal);

        let mut document = Document::new();
        part.emit(&mut document);
        part.emit(&mut document);
        assert_eq!(document.sections.len(), 2);
        assert!(document.sections.iter().all(|s| s.role == SectionRole::Content));
    }
}
