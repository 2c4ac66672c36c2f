//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of an assembled document: a [`Document`] owns
//! [`Section`]s, sections own block-level [`ContentNode`]s, and paragraphs own
//! [`Inline`] runs. Every node owns its children; there is no sharing and no
//! cycles. Once a template has been built, the graph is handed to a renderer
//! untouched.

mod block;
mod document;
mod error;
mod plain_text;
mod table;
mod text;

pub use block::{Chart, ChartKind, ChartSeries, ContentNode, Image, Paragraph, TextFrame};
pub use document::{Document, DocumentInfo, HeaderFooter, Section, SectionRole};
pub use error::TableError;
pub use plain_text::PlainText;
pub use table::{Cell, CellData, Column, Row, Table};
pub use text::{
    styled_spans, FormattedText, Footnote, Hyperlink, Inline, InlineContainer, StyledSpan, Symbol,
    Text, TextFormat,
};

pub use folio_style::StyleName;
