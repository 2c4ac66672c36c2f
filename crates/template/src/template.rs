//! The composition engine that orders parts into one document.

use crate::chapter::Appendix;
use crate::error::TemplateError;
use crate::front_page::FrontPage;
use crate::part::DocumentPart;
use crate::theme::{DefaultTheme, DocumentTheme};
use crate::toc::TableOfContents;
use folio_idf::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four groups a template's emission order is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartGroup {
    FrontPage,
    TableOfContents,
    #[serde(alias = "chapters")]
    Content,
    Appendices,
}

impl PartGroup {
    pub const DEFAULT_ORDER: [PartGroup; 4] = [
        PartGroup::FrontPage,
        PartGroup::TableOfContents,
        PartGroup::Content,
        PartGroup::Appendices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartGroup::FrontPage => "frontPage",
            PartGroup::TableOfContents => "tableOfContents",
            PartGroup::Content => "content",
            PartGroup::Appendices => "appendices",
        }
    }
}

impl fmt::Display for PartGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartGroup {
    type Err = TemplateError;

    /// Case-insensitive; `chapters` is accepted for `content`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frontpage" => Ok(PartGroup::FrontPage),
            "tableofcontents" | "toc" => Ok(PartGroup::TableOfContents),
            "content" | "chapters" => Ok(PartGroup::Content),
            "appendices" => Ok(PartGroup::Appendices),
            _ => Err(TemplateError::UnknownPartGroup(s.to_string())),
        }
    }
}

/// Collects document parts and assembles them into a themed document.
///
/// Building does not change the template, so one template can be built any
/// number of times; each call produces an independent document.
#[derive(Debug)]
pub struct DocumentTemplate {
    front_page: Option<FrontPage>,
    table_of_contents: Option<TableOfContents>,
    parts: Vec<Box<dyn DocumentPart>>,
    appendices: Vec<Appendix>,
    order: Vec<PartGroup>,
    theme: Box<dyn DocumentTheme>,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            front_page: None,
            table_of_contents: None,
            parts: Vec::new(),
            appendices: Vec::new(),
            order: PartGroup::DEFAULT_ORDER.to_vec(),
            theme: Box::new(DefaultTheme::default()),
        }
    }
}

impl DocumentTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_front_page(&mut self, front_page: FrontPage) -> &mut Self {
        self.front_page = Some(front_page);
        self
    }

    pub fn add_table_of_contents(&mut self, toc: TableOfContents) -> &mut Self {
        self.table_of_contents = Some(toc);
        self
    }

    /// Inserts a content part at `position`, or appends it when the position
    /// is absent or past the end.
    pub fn add_part(&mut self, part: impl DocumentPart + 'static, position: Option<usize>) -> &mut Self {
        let index = match position {
            Some(index) if index <= self.parts.len() => index,
            _ => self.parts.len(),
        };
        self.parts.insert(index, Box::new(part));
        self
    }

    /// Appends a content part.
    pub fn push_part(&mut self, part: impl DocumentPart + 'static) -> &mut Self {
        self.add_part(part, None)
    }

    pub fn add_appendix(&mut self, appendix: Appendix) -> &mut Self {
        self.appendices.push(appendix);
        self
    }

    /// Replaces the emission order. A group listed more than once is emitted
    /// only at its first position.
    pub fn order_document(&mut self, groups: impl IntoIterator<Item = PartGroup>) -> &mut Self {
        let mut order = Vec::new();
        for group in groups {
            if order.contains(&group) {
                log::warn!("Part group '{}' listed more than once; keeping the first", group);
                continue;
            }
            order.push(group);
        }
        self.order = order;
        self
    }

    pub fn with_theme(&mut self, theme: impl DocumentTheme + 'static) -> &mut Self {
        self.theme = Box::new(theme);
        self
    }

    pub fn front_page(&self) -> Option<&FrontPage> {
        self.front_page.as_ref()
    }

    pub fn table_of_contents(&self) -> Option<&TableOfContents> {
        self.table_of_contents.as_ref()
    }

    pub fn table_of_contents_mut(&mut self) -> Option<&mut TableOfContents> {
        self.table_of_contents.as_mut()
    }

    pub fn parts(&self) -> &[Box<dyn DocumentPart>] {
        &self.parts
    }

    pub fn appendices(&self) -> &[Appendix] {
        &self.appendices
    }

    pub fn order(&self) -> &[PartGroup] {
        &self.order
    }

    /// Assembles the document.
    ///
    /// Applies the theme, emits every group in the configured order, then
    /// generates the table of contents over the finished headings. A missing
    /// front page is skipped; a missing table of contents fails the build
    /// before anything is emitted.
    pub fn build(&self) -> Result<Document, TemplateError> {
        let toc = self
            .table_of_contents
            .as_ref()
            .ok_or(TemplateError::MissingTableOfContents)?;

        let mut document = Document::new();
        self.theme.apply(&mut document);

        for group in &self.order {
            match group {
                PartGroup::FrontPage => {
                    if let Some(front_page) = &self.front_page {
                        front_page.emit(&mut document);
                    }
                }
                PartGroup::TableOfContents => toc.emit(&mut document),
                PartGroup::Content => {
                    for part in &self.parts {
                        part.emit(&mut document);
                    }
                }
                PartGroup::Appendices => {
                    for appendix in &self.appendices {
                        appendix.emit(&mut document);
                    }
                }
            }
        }

        toc.generate(&mut document);
        log::debug!(
            "Built document: {} section(s) from {} part(s) and {} appendix(es)",
            document.sections.len(),
            self.parts.len(),
            self.appendices.len()
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::Chapter;
    use crate::part::ContentPart;
    use crate::toc::HeadingRef;
    use folio_idf::{PlainText, SectionRole, StyleName};

    fn paragraph_part(text: &str) -> ContentPart {
        let mut part = ContentPart::new();
        part.add_paragraph(text, StyleName::Normal);
        part
    }

    fn roles(document: &Document) -> Vec<SectionRole> {
        document.sections.iter().map(|s| s.role).collect()
    }

    #[test]
    fn test_build_without_toc_fails() {
        let mut template = DocumentTemplate::new();
        template.push_part(paragraph_part("x"));
        assert_eq!(template.build().unwrap_err(), TemplateError::MissingTableOfContents);
    }

    #[test]
    fn test_default_order() {
        let mut template = DocumentTemplate::new();
        template
            .add_appendix(Appendix::new("Data"))
            .push_part(Chapter::new(1, "Intro"))
            .add_table_of_contents(TableOfContents::new())
            .add_front_page(FrontPage::new("Report"));

        let document = template.build().unwrap();
        assert_eq!(
            roles(&document),
            vec![
                SectionRole::FrontPage,
                SectionRole::TableOfContents,
                SectionRole::Content,
                SectionRole::Appendix
            ]
        );
    }

    #[test]
    fn test_absent_front_page_is_skipped() {
        let mut template = DocumentTemplate::new();
        template.add_table_of_contents(TableOfContents::new());
        let document = template.build().unwrap();
        assert_eq!(roles(&document), vec![SectionRole::TableOfContents]);
    }

    #[test]
    fn test_custom_order_and_duplicates() {
        let mut template = DocumentTemplate::new();
        template
            .add_table_of_contents(TableOfContents::new())
            .push_part(paragraph_part("c"))
            .order_document([PartGroup::Content, PartGroup::TableOfContents, PartGroup::Content]);

        assert_eq!(template.order(), &[PartGroup::Content, PartGroup::TableOfContents]);
        let document = template.build().unwrap();
        assert_eq!(roles(&document), vec![SectionRole::Content, SectionRole::TableOfContents]);
    }

    #[test]
    fn test_add_part_positions() {
        let mut template = DocumentTemplate::new();
        template
            .add_table_of_contents(TableOfContents::new())
            .add_part(paragraph_part("b"), None)
            .add_part(paragraph_part("a"), Some(0))
            .add_part(paragraph_part("d"), Some(99))
            .add_part(paragraph_part("c"), Some(2));

        let document = template.build().unwrap();
        let texts: Vec<String> = document
            .sections_with_role(SectionRole::Content)
            .map(|s| s.plain_text())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_chapter_heading_in_built_document() {
        let mut chapter = Chapter::new(1, "Intro");
        chapter.add_part(paragraph_part("Hello"));
        let mut template = DocumentTemplate::new();
        template.add_table_of_contents(TableOfContents::new()).push_part(chapter);

        let document = template.build().unwrap();
        let content = document.sections_with_role(SectionRole::Content).next().unwrap();
        let heading = content
            .paragraphs()
            .find(|p| p.style == StyleName::Heading1)
            .unwrap();
        assert_eq!(heading.plain_text(), "1. Intro");
        assert_eq!(heading.id.as_deref(), Some("1-intro"));
    }

    #[test]
    fn test_build_is_repeatable_and_leaves_toc_alone() {
        let mut toc = TableOfContents::user_defined();
        toc.add_item(HeadingRef::new(1, "Manual"));
        let mut template = DocumentTemplate::new();
        template.add_table_of_contents(toc.clone()).push_part(Chapter::new(1, "Intro"));

        let first = template.build().unwrap();
        let second = template.build().unwrap();
        assert_eq!(first, second);
        assert_eq!(template.table_of_contents(), Some(&toc));
        assert_eq!(template.table_of_contents().unwrap().items().len(), 1);
    }

    #[test]
    fn test_part_group_parsing() {
        assert_eq!("Chapters".parse::<PartGroup>().unwrap(), PartGroup::Content);
        assert_eq!("frontPage".parse::<PartGroup>().unwrap(), PartGroup::FrontPage);
        assert!(matches!(
            "cover".parse::<PartGroup>(),
            Err(TemplateError::UnknownPartGroup(tag)) if tag == "cover"
        ));
    }
}
