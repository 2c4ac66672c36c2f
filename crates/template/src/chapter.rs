//! Parts that open a section of their own under a heading.

use crate::part::DocumentPart;
use folio_idf::{ContentNode, Document, Paragraph, Section, SectionRole, StyleName};
use std::cell::OnceCell;

/// A titled group of child parts backed by a lazily created section.
///
/// The backing section starts out holding one empty `Heading1` paragraph. It
/// is created on first access and kept for the owner's lifetime; every
/// emission works on a copy of it so the cached section itself never changes.
#[derive(Debug)]
struct HeadedSection {
    role: SectionRole,
    children: Vec<Box<dyn DocumentPart>>,
    section: OnceCell<Section>,
}

impl HeadedSection {
    fn new(role: SectionRole) -> Self {
        Self {
            role,
            children: Vec::new(),
            section: OnceCell::new(),
        }
    }

    fn section(&self) -> &Section {
        self.section.get_or_init(|| {
            let mut section = Section::new(self.role);
            section.add_paragraph(Paragraph::with_style(StyleName::Heading1));
            section
        })
    }

    fn emit(&self, heading: String, document: &mut Document) {
        let mut section = self.section().clone();
        if let Some(paragraph) = section.elements.first_mut().and_then(ContentNode::as_paragraph_mut) {
            paragraph.set_text(heading);
        }
        for child in &self.children {
            child.emit_into(&mut section);
        }
        log::debug!(
            "Emitted {:?} section with {} element(s)",
            self.role,
            section.elements.len()
        );
        document.add_section(section);
    }

    fn emit_into(&self, heading: String, section: &mut Section) {
        section.add_text_paragraph(heading, StyleName::Heading1);
        for child in &self.children {
            child.emit_into(section);
        }
    }
}

/// A numbered chapter whose heading reads `"{number}. {title}"`.
#[derive(Debug)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    inner: HeadedSection,
}

impl Chapter {
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            inner: HeadedSection::new(SectionRole::Content),
        }
    }

    /// Adds a child part, emitted below the heading in insertion order.
    pub fn add_part(&mut self, part: impl DocumentPart + 'static) -> &mut Self {
        self.inner.children.push(Box::new(part));
        self
    }

    pub fn heading_text(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    /// The backing section, created on first access.
    pub fn section(&self) -> &Section {
        self.inner.section()
    }

    pub fn children(&self) -> &[Box<dyn DocumentPart>] {
        &self.inner.children
    }
}

impl DocumentPart for Chapter {
    fn emit_into(&self, section: &mut Section) {
        self.inner.emit_into(self.heading_text(), section);
    }

    fn emit(&self, document: &mut Document) {
        self.inner.emit(self.heading_text(), document);
    }
}

/// Supplementary material emitted after the main content.
#[derive(Debug)]
pub struct Appendix {
    pub title: String,
    inner: HeadedSection,
}

impl Appendix {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            inner: HeadedSection::new(SectionRole::Appendix),
        }
    }

    pub fn add_part(&mut self, part: impl DocumentPart + 'static) -> &mut Self {
        self.inner.children.push(Box::new(part));
        self
    }

    /// The bare title; appendices carry no numbering.
    pub fn heading_text(&self) -> String {
        self.title.clone()
    }

    pub fn section(&self) -> &Section {
        self.inner.section()
    }

    pub fn children(&self) -> &[Box<dyn DocumentPart>] {
        &self.inner.children
    }
}

impl DocumentPart for Appendix {
    fn emit_into(&self, section: &mut Section) {
        self.inner.emit_into(self.heading_text(), section);
    }

    fn emit(&self, document: &mut Document) {
        self.inner.emit(self.heading_text(), document);
    }

    fn role(&self) -> SectionRole {
        SectionRole::Appendix
    }
}
