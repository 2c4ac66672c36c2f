use crate::block::{ContentNode, Paragraph};
use crate::error::TableError;
use crate::table::Table;
use folio_style::{StyleName, Stylesheet};
use serde::Serialize;

/// Which document part group produced a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionRole {
    FrontPage,
    TableOfContents,
    #[default]
    Content,
    Appendix,
}

/// Block content repeated at the top or bottom of every page of a section.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HeaderFooter {
    pub elements: Vec<ContentNode>,
}

impl HeaderFooter {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A run of pages sharing page setup, holding block content in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Section {
    pub role: SectionRole,
    #[serde(skip_serializing_if = "HeaderFooter::is_empty")]
    pub header: HeaderFooter,
    #[serde(skip_serializing_if = "HeaderFooter::is_empty")]
    pub footer: HeaderFooter,
    pub elements: Vec<ContentNode>,
}

impl Section {
    pub fn new(role: SectionRole) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn add(&mut self, node: impl Into<ContentNode>) -> &mut Self {
        self.elements.push(node.into());
        self
    }

    /// Appends a paragraph and returns it for further content.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        let index = self.elements.len();
        self.elements.push(ContentNode::Paragraph(paragraph));
        match &mut self.elements[index] {
            ContentNode::Paragraph(p) => p,
            _ => unreachable!("element was just pushed as a paragraph"),
        }
    }

    /// Appends a paragraph holding `text` in `style`.
    pub fn add_text_paragraph(&mut self, text: impl Into<String>, style: StyleName) -> &mut Paragraph {
        self.add_paragraph(Paragraph::from_text(text, style))
    }

    /// Appends a table and returns it for row building.
    pub fn add_table(&mut self, table: Table) -> &mut Table {
        let index = self.elements.len();
        self.elements.push(ContentNode::Table(table));
        match &mut self.elements[index] {
            ContentNode::Table(t) => t,
            _ => unreachable!("element was just pushed as a table"),
        }
    }

    /// Appends a table with one fixed-width column per entry.
    pub fn add_fixed_width_table(&mut self, column_widths: &[u32]) -> &mut Table {
        self.add_table(Table::with_column_widths(column_widths))
    }

    /// Appends an auto-width table; nothing is appended if validation fails.
    pub fn add_auto_width_table(
        &mut self,
        full_width: u32,
        min_column_widths: &[u32],
    ) -> Result<&mut Table, TableError> {
        let table = Table::auto_width(full_width, min_column_widths)?;
        Ok(self.add_table(table))
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(ContentNode::as_paragraph)
    }

    /// Paragraphs styled as headings, in order.
    pub fn headings(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs().filter(|p| p.is_heading())
    }
}

/// Descriptive metadata carried alongside the content.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocumentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// The root of an assembled document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    pub info: DocumentInfo,
    pub styles: Stylesheet,
    pub sections: Vec<Section>,
}

impl Document {
    /// Creates an empty document with the standard stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section and returns it for filling.
    pub fn add_section(&mut self, section: Section) -> &mut Section {
        self.sections.push(section);
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    pub fn sections_with_role(&self, role: SectionRole) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.role == role)
    }

    pub fn last_section_mut(&mut self) -> Option<&mut Section> {
        self.sections.last_mut()
    }
}
