//! Document assembly: parts, themes and the template that orders them.
//!
//! A [`DocumentTemplate`] owns an optional [`FrontPage`], a
//! [`TableOfContents`], the content parts and the appendices. Building it
//! applies the theme to a fresh [`folio_idf::Document`], emits each part group
//! in the configured order and finally lets the table of contents scan the
//! finished headings.

mod chapter;
mod error;
mod front_page;
mod part;
mod template;
mod theme;
mod toc;

pub use chapter::{Appendix, Chapter};
pub use error::TemplateError;
pub use front_page::FrontPage;
pub use part::{ContentPart, DocumentPart};
pub use template::{DocumentTemplate, PartGroup};
pub use theme::{DefaultTheme, DocumentTheme};
pub use toc::{HeadingRef, TableOfContents};
