use crate::part::DocumentPart;
use chrono::NaiveDate;
use folio_idf::{Document, Section, SectionRole, StyleName};

/// Title page data. Layout beyond paragraph styles is left to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontPage {
    pub title: String,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub published: Option<NaiveDate>,
}

impl FrontPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn published(mut self, date: NaiveDate) -> Self {
        self.published = Some(date);
        self
    }

    /// The publish date as printed, e.g. `3 March 2024`.
    pub fn published_text(&self) -> Option<String> {
        self.published.map(|date| date.format("%-d %B %Y").to_string())
    }
}

impl DocumentPart for FrontPage {
    fn emit_into(&self, section: &mut Section) {
        section.add_text_paragraph(self.title.clone(), StyleName::Heading1);
        if let Some(subtitle) = &self.subtitle {
            section.add_text_paragraph(subtitle.clone(), StyleName::Heading2);
        }
        if let Some(author) = &self.author {
            section.add_text_paragraph(author.clone(), StyleName::Normal);
        }
        if let Some(date) = self.published_text() {
            section.add_text_paragraph(date, StyleName::Normal);
        }
    }

    /// Also fills in the document title and author where they are unset.
    fn emit(&self, document: &mut Document) {
        document.info.title.get_or_insert_with(|| self.title.clone());
        if let Some(author) = &self.author {
            document.info.author.get_or_insert_with(|| author.clone());
        }
        let section = document.add_section(Section::new(SectionRole::FrontPage));
        self.emit_into(section);
    }

    fn role(&self) -> SectionRole {
        SectionRole::FrontPage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::PlainText;

    #[test]
    fn test_front_page_layout() {
        let page = FrontPage::new("Annual Report")
            .subtitle("2024")
            .author("J. Doe")
            .published(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());

        let mut document = Document::new();
        page.emit(&mut document);

        let section = &document.sections[0];
        assert_eq!(section.role, SectionRole::FrontPage);
        let styles: Vec<StyleName> = section.paragraphs().map(|p| p.style).collect();
        assert_eq!(
            styles,
            vec![StyleName::Heading1, StyleName::Heading2, StyleName::Normal, StyleName::Normal]
        );
        assert_eq!(section.plain_text(), "Annual Report2024J. Doe3 March 2024");
        assert_eq!(document.info.title.as_deref(), Some("Annual Report"));
        assert_eq!(document.info.author.as_deref(), Some("J. Doe"));
    }

    #[test]
    fn test_minimal_front_page() {
        let mut section = Section::new(SectionRole::FrontPage);
        FrontPage::new("Only").emit_into(&mut section);
        assert_eq!(section.elements.len(), 1);
    }
}
