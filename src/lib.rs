//! folio assembles themed documents from independently authored parts.
//!
//! The workspace crates do the work: [`folio_markup`] turns a restricted HTML
//! subset into styled text, [`folio_idf`] holds the resulting content graph
//! and [`folio_template`] orders parts into one document. This crate adds a
//! JSON [`Manifest`] describing a template declaratively, a plain-text
//! rendering of built documents and the `folio` command line tool.

pub mod error;
pub mod manifest;
pub mod text;

pub use error::Error;
pub use manifest::Manifest;
pub use text::render_text;

pub use folio_idf::{
    Cell, CellData, ContentNode, Document, Paragraph, PlainText, Section, SectionRole, Table, TableError,
};
pub use folio_markup::{AddMarkup, StyledTextBuilder};
pub use folio_style::StyleName;
pub use folio_template::{
    Appendix, Chapter, ContentPart, DefaultTheme, DocumentPart, DocumentTemplate, DocumentTheme, FrontPage,
    HeadingRef, PartGroup, TableOfContents, TemplateError,
};
pub use folio_traits::{FontProvider, InstalledFonts};
