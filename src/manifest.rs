//! JSON manifests describing a document template.
//!
//! ```json
//! {
//!   "frontPage": { "title": "Report", "author": "J. Doe", "published": "2024-03-03" },
//!   "tableOfContents": { "includeHeadingsToLevel": 2 },
//!   "content": [
//!     { "kind": "chapter", "title": "Intro", "parts": [
//!       { "kind": "html", "html": "<p>Hello <b>world</b></p>" }
//!     ] }
//!   ],
//!   "order": ["frontPage", "tableOfContents", "content", "appendices"]
//! }
//! ```

use crate::error::Error;
use chrono::NaiveDate;
use folio_idf::{CellData, Paragraph, Table};
use folio_markup::AddMarkup;
use folio_style::StyleName;
use folio_template::{
    Appendix, Chapter, ContentPart, DefaultTheme, DocumentPart, DocumentTemplate, FrontPage, HeadingRef,
    PartGroup, TableOfContents,
};
use folio_traits::FontProvider;
use folio_types::{Color, TocEntry};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub front_page: Option<FrontPageSpec>,
    #[serde(default)]
    pub table_of_contents: Option<TocSpec>,
    #[serde(default)]
    pub content: Vec<ContentEntry>,
    #[serde(default)]
    pub appendices: Vec<AppendixSpec>,
    #[serde(default)]
    pub order: Option<Vec<PartGroup>>,
    #[serde(default)]
    pub theme: Option<ThemeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrontPageSpec {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub published: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TocSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_defined: bool,
    #[serde(default)]
    pub include_headings_to_level: Option<u8>,
    #[serde(default)]
    pub ignore: Vec<HeadingSpec>,
    #[serde(default)]
    pub items: Vec<TocEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadingSpec {
    pub level: u8,
    pub text: String,
}

/// A top-level content part with an optional insertion position.
///
/// A negative or out-of-range position appends.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(flatten)]
    pub part: PartSpec,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PartSpec {
    /// Markup converted when the part is emitted.
    Html { html: String },
    Paragraph {
        text: String,
        #[serde(default)]
        style: StyleName,
    },
    Table(TableSpec),
    Chapter(ChapterSpec),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSpec {
    /// Defaults to the chapter's 1-based position among its siblings.
    #[serde(default)]
    pub number: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub parts: Vec<PartSpec>,
}

/// Exactly one of `columns`, `columnWidths` or `autoWidth` sizes the table;
/// with none of them the widest row decides the column count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec {
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub column_widths: Option<Vec<u32>>,
    #[serde(default)]
    pub auto_width: Option<AutoWidthSpec>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AutoWidthSpec {
    pub full_width: u32,
    pub min_column_widths: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppendixSpec {
    pub title: String,
    #[serde(default)]
    pub parts: Vec<PartSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeSpec {
    #[serde(default)]
    pub heading_fonts: Option<Vec<String>>,
    #[serde(default)]
    pub body_fonts: Option<Vec<String>>,
    /// `#rrggbb`, `#aarrggbb` or a packed ARGB number.
    #[serde(default)]
    pub heading_color: Option<Color>,
}

impl FromStr for Manifest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Manifest {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::debug!("Loading manifest from {}", path.display());
        let source = fs::read_to_string(path)?;
        source.parse()
    }

    /// Builds the template the manifest describes.
    ///
    /// Tables are filled here, so row errors surface before any document is
    /// built.
    pub fn to_template(&self, fonts: Arc<dyn FontProvider>) -> Result<DocumentTemplate, Error> {
        let mut template = DocumentTemplate::new();

        let mut theme = DefaultTheme::new().with_font_provider(fonts);
        if let Some(decl) = &self.theme {
            if let Some(fonts) = &decl.heading_fonts {
                theme = theme.with_heading_fonts(fonts.iter().cloned());
            }
            if let Some(fonts) = &decl.body_fonts {
                theme = theme.with_body_fonts(fonts.iter().cloned());
            }
            if let Some(color) = decl.heading_color {
                theme = theme.with_heading_color(color);
            }
        }
        template.with_theme(theme);

        if let Some(decl) = &self.front_page {
            let mut page = FrontPage::new(decl.title.clone());
            page.subtitle = decl.subtitle.clone();
            page.author = decl.author.clone();
            page.published = decl.published;
            template.add_front_page(page);
        }

        if let Some(decl) = &self.table_of_contents {
            template.add_table_of_contents(decl.to_table_of_contents());
        }

        let mut chapters = 0;
        for entry in &self.content {
            if let PartSpec::Chapter(_) = entry.part {
                chapters += 1;
            }
            let part = entry.part.to_part(chapters)?;
            let position = entry.position.and_then(|p| usize::try_from(p).ok());
            template.add_part(part, position);
        }

        for decl in &self.appendices {
            let mut appendix = Appendix::new(decl.title.clone());
            let mut chapters = 0;
            for part in &decl.parts {
                if let PartSpec::Chapter(_) = part {
                    chapters += 1;
                }
                appendix.add_part(part.to_part(chapters)?);
            }
            template.add_appendix(appendix);
        }

        if let Some(order) = &self.order {
            template.order_document(order.iter().copied());
        }

        Ok(template)
    }
}

impl TocSpec {
    fn to_table_of_contents(&self) -> TableOfContents {
        let mut toc = if self.user_defined {
            TableOfContents::user_defined()
        } else {
            TableOfContents::new()
        };
        if let Some(title) = &self.title {
            toc = toc.with_title(title.clone());
        }
        if let Some(level) = self.include_headings_to_level {
            toc = toc.include_headings_to_level(level);
        }
        for heading in &self.ignore {
            toc.ignore_item(HeadingRef::new(heading.level, heading.text.clone()));
        }
        for item in &self.items {
            toc.add_item(item.clone());
        }
        toc
    }
}

impl PartSpec {
    /// `position` numbers chapters that carry no explicit number.
    fn to_part(&self, position: u32) -> Result<Box<dyn DocumentPart>, Error> {
        Ok(match self {
            PartSpec::Html { html } => {
                let mut part = ContentPart::new();
                part.add_html(html.clone());
                Box::new(part)
            }
            PartSpec::Paragraph { text, style } => {
                let mut part = ContentPart::new();
                part.add_paragraph(text.clone(), *style);
                Box::new(part)
            }
            PartSpec::Table(decl) => {
                let mut part = ContentPart::new();
                part.add_table(decl.to_table()?);
                Box::new(part)
            }
            PartSpec::Chapter(decl) => {
                let mut chapter = Chapter::new(decl.number.unwrap_or(position), decl.title.clone());
                let mut nested = 0;
                for child in &decl.parts {
                    if let PartSpec::Chapter(_) = child {
                        nested += 1;
                    }
                    chapter.add_part(child.to_part(nested)?);
                }
                Box::new(chapter)
            }
        })
    }
}

impl TableSpec {
    pub fn to_table(&self) -> Result<Table, Error> {
        let mut table = if let Some(auto) = &self.auto_width {
            Table::auto_width(auto.full_width, &auto.min_column_widths)?
        } else if let Some(widths) = &self.column_widths {
            Table::with_column_widths(widths)
        } else {
            let columns = self
                .columns
                .unwrap_or_else(|| self.rows.iter().map(Vec::len).max().unwrap_or(0));
            Table::with_columns(columns)
        };

        for row in &self.rows {
            table.add_row(row.iter().map(cell_data).collect::<Vec<_>>())?;
        }
        Ok(table)
    }
}

/// Strings are used verbatim, `{"html": ...}` objects become converted
/// paragraphs, `null` an empty cell paragraph and anything else its JSON text.
fn cell_data(value: &Value) -> CellData {
    match value {
        Value::String(s) => CellData::from(s.as_str()),
        Value::Null => CellData::from(""),
        Value::Bool(b) => CellData::from(*b),
        Value::Object(map) => match map.get("html").and_then(Value::as_str) {
            Some(html) => {
                let mut paragraph = Paragraph::with_style(StyleName::Normal);
                paragraph.add_html(html);
                CellData::from(paragraph)
            }
            None => CellData::display(value),
        },
        _ => CellData::display(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::PlainText;
    use folio_traits::InstalledFonts;

    fn no_fonts() -> Arc<dyn FontProvider> {
        Arc::new(InstalledFonts::new())
    }

    #[test]
    fn test_cell_values() {
        let decl: TableSpec =
            serde_json::from_value(serde_json::json!({ "rows": [[42, "x", null, {"html": "<b>y</b>"}, true]] }))
                .unwrap();
        let table = decl.to_table().unwrap();
        assert_eq!(table.column_count(), 5);
        let texts: Vec<String> = table.rows[0].cells.iter().map(|c| c.plain_text()).collect();
        assert_eq!(texts, vec!["42", "x", "", "y", "true"]);
    }

    #[test]
    fn test_too_many_cells_is_a_table_error() {
        let decl: TableSpec =
            serde_json::from_value(serde_json::json!({ "columns": 1, "rows": [[1, 2]] })).unwrap();
        assert!(matches!(decl.to_table(), Err(Error::Table(folio_idf::TableError::OutOfRange { .. }))));
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        let err = r#"{ "order": ["frontPage", "cover"] }"#.parse::<Manifest>().unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn test_chapters_are_numbered_by_position() {
        let manifest: Manifest = r#"{
            "tableOfContents": {},
            "content": [
                { "kind": "paragraph", "text": "Preface" },
                { "kind": "chapter", "title": "One" },
                { "kind": "chapter", "title": "Two" },
                { "kind": "chapter", "title": "Ten", "number": 10 }
            ]
        }"#
        .parse()
        .unwrap();

        let document = manifest.to_template(no_fonts()).unwrap().build().unwrap();
        let headings: Vec<String> = document
            .sections
            .iter()
            .flat_map(|s| s.headings())
            .filter(|p| p.style == StyleName::Heading1)
            .map(|p| p.plain_text())
            .collect();
        assert_eq!(headings, vec!["Contents", "1. One", "2. Two", "10. Ten"]);
    }
}
