//! The table of contents part and its deferred generation pass.

use crate::part::DocumentPart;
use folio_idf::{ContentNode, Document, Hyperlink, Paragraph, PlainText, Section, SectionRole, StyleName};
use folio_types::TocEntry;
use std::collections::HashSet;

/// Identifies a heading by level and text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadingRef {
    pub level: u8,
    pub text: String,
}

impl HeadingRef {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// The reference for a heading paragraph; `None` for body paragraphs.
    pub fn of(paragraph: &Paragraph) -> Option<Self> {
        paragraph
            .heading_level()
            .map(|level| Self::new(level, paragraph.plain_text()))
    }
}

impl From<&HeadingRef> for TocEntry {
    fn from(heading: &HeadingRef) -> Self {
        TocEntry::new(heading.level, heading.text.clone())
    }
}

impl From<HeadingRef> for TocEntry {
    fn from(heading: HeadingRef) -> Self {
        TocEntry::new(heading.level, heading.text)
    }
}

const DEFAULT_TITLE: &str = "Contents";
const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct TableOfContents {
    pub title: String,
    user_defined: bool,
    include_headings_to_level: u8,
    ignored: Vec<HeadingRef>,
    items: Vec<TocEntry>,
}

impl Default for TableOfContents {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            user_defined: false,
            include_headings_to_level: DEFAULT_DEPTH,
            ignored: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl TableOfContents {
    /// A generated table listing `Heading1` to `Heading3`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table whose entries are supplied with [`add_item`](Self::add_item).
    /// Generation leaves it untouched.
    pub fn user_defined() -> Self {
        Self {
            user_defined: true,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Deepest heading level listed, clamped to 1..=6.
    pub fn include_headings_to_level(mut self, level: u8) -> Self {
        self.include_headings_to_level = level.clamp(1, 6);
        self
    }

    pub fn is_user_defined(&self) -> bool {
        self.user_defined
    }

    pub fn depth(&self) -> u8 {
        self.include_headings_to_level
    }

    pub fn add_item(&mut self, item: impl Into<TocEntry>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Excludes a heading from generated tables.
    pub fn ignore_item(&mut self, heading: HeadingRef) -> &mut Self {
        if !self.ignored.contains(&heading) {
            self.ignored.push(heading);
        }
        self
    }

    pub fn items(&self) -> &[TocEntry] {
        &self.items
    }

    pub fn ignored(&self) -> &[HeadingRef] {
        &self.ignored
    }

    /// Lists the document's headings in the table of contents section.
    ///
    /// Scans content and appendix sections in document order, skipping
    /// headings deeper than the configured level and ignored headings. Each
    /// listed heading without an anchor id receives one derived from its
    /// text. Returns the number of entries added; a user-defined table, or a
    /// document without a table of contents section, is left untouched and
    /// yields zero.
    pub fn generate(&self, document: &mut Document) -> usize {
        if self.user_defined {
            log::debug!("Table of contents is user defined; skipping generation");
            return 0;
        }

        let Some(toc_index) = document
            .sections
            .iter()
            .position(|s| s.role == SectionRole::TableOfContents)
        else {
            log::warn!("Table of contents section was not emitted; skipping generation");
            return 0;
        };

        let mut used_ids: HashSet<String> = document
            .sections
            .iter()
            .flat_map(|s| s.paragraphs())
            .filter_map(|p| p.id.clone())
            .collect();

        let mut entries = Vec::new();
        for section in document
            .sections
            .iter_mut()
            .filter(|s| matches!(s.role, SectionRole::Content | SectionRole::Appendix))
        {
            for paragraph in section.elements.iter_mut().filter_map(ContentNode::as_paragraph_mut) {
                let Some(heading) = HeadingRef::of(paragraph) else {
                    continue;
                };
                if heading.level > self.include_headings_to_level || self.ignored.contains(&heading) {
                    continue;
                }
                let id = paragraph
                    .id
                    .get_or_insert_with(|| unique_anchor(&heading.text, &mut used_ids))
                    .clone();
                entries.push(TocEntry::from(heading).with_target(id));
            }
        }

        let section = &mut document.sections[toc_index];
        for entry in &entries {
            section.add(entry_paragraph(entry));
        }
        log::debug!("Generated table of contents with {} entries", entries.len());
        entries.len()
    }
}

/// A slug of `text` not yet in `used`, suffixed `-2`, `-3`... on collision.
fn unique_anchor(text: &str, used: &mut HashSet<String>) -> String {
    let mut base = slug::slugify(text);
    if base.is_empty() {
        base = "heading".to_string();
    }
    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

fn entry_paragraph(entry: &TocEntry) -> Paragraph {
    let paragraph = Paragraph::with_style(StyleName::NoSpacing).indent(entry.level.saturating_sub(1));
    match &entry.target_id {
        Some(id) => paragraph.child(Hyperlink::new(format!("#{}", id)).text(entry.text.clone())),
        None => paragraph.text(entry.text.clone()),
    }
}

impl DocumentPart for TableOfContents {
    fn emit_into(&self, section: &mut Section) {
        section.add_text_paragraph(self.title.clone(), StyleName::Heading1);
        if self.user_defined {
            for item in &self.items {
                section.add(entry_paragraph(item));
            }
        }
    }

    fn role(&self) -> SectionRole {
        SectionRole::TableOfContents
    }
}
