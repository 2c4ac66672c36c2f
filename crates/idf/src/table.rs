//! Tables and the row builder that fills them from heterogeneous values.

use crate::block::{Chart, ContentNode, Image, Paragraph, TextFrame};
use crate::error::TableError;
use crate::text::{FormattedText, InlineContainer, Text};
use folio_style::StyleName;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Column {
    /// Fixed width in points; `None` leaves the width to the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Cell {
    pub elements: Vec<ContentNode>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Attaches one payload to the cell.
    ///
    /// Paragraphs, frames, images and charts are added as-is. Styled runs and
    /// bare text are wrapped in a new paragraph, and every other value becomes
    /// a paragraph holding its display string.
    pub fn add_data(&mut self, data: CellData) -> &mut Self {
        let node = match data {
            CellData::Paragraph(p) => ContentNode::Paragraph(p),
            CellData::TextFrame(f) => ContentNode::TextFrame(f),
            CellData::Image(i) => ContentNode::Image(i),
            CellData::Chart(c) => ContentNode::Chart(c),
            CellData::FormattedText(run) => {
                let mut p = Paragraph::new();
                p.add_formatted(run);
                ContentNode::Paragraph(p)
            }
            CellData::Text(text) => {
                let mut p = Paragraph::new();
                p.push_inline(text);
                ContentNode::Paragraph(p)
            }
            CellData::Display(s) => ContentNode::Paragraph(Paragraph::from_text(s, StyleName::Normal)),
        };
        self.elements.push(node);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A payload destined for a single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellData {
    Paragraph(Paragraph),
    FormattedText(FormattedText),
    Text(Text),
    TextFrame(TextFrame),
    Image(Image),
    Chart(Chart),
    /// Any other value, already rendered through `Display`.
    Display(String),
}

impl CellData {
    /// Wraps any displayable value.
    pub fn display(value: impl Display) -> Self {
        CellData::Display(value.to_string())
    }
}

macro_rules! cell_data_from_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for CellData {
                fn from(value: $ty) -> Self {
                    CellData::$ty(value)
                }
            }
        )*
    };
}

cell_data_from_node!(Paragraph, FormattedText, Text, TextFrame, Image, Chart);

macro_rules! cell_data_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CellData {
                fn from(value: $ty) -> Self {
                    CellData::Display(value.to_string())
                }
            }
        )*
    };
}

cell_data_from_display!(
    &str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

/// Builds a `Vec<CellData>` from heterogeneous values.
///
/// ```ignore
/// table.add_row(cells![42, "x", Paragraph::from_text("p", StyleName::Normal)])?;
/// ```
#[macro_export]
macro_rules! cells {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::CellData::from($value)),*]
    };
}

/// A table of fixed column count.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// Total width an auto-width table must fit in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_width: Option<u32>,
    /// Per-column minimum widths recorded when an auto-width table is created.
    /// The renderer balances actual widths against these.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_column_widths: Option<Vec<u32>>,
}

impl Table {
    /// Creates a table with `count` columns of renderer-chosen width.
    pub fn with_columns(count: usize) -> Self {
        Self {
            columns: vec![Column::default(); count],
            ..Default::default()
        }
    }

    /// Creates a table with one fixed-width column per entry.
    pub fn with_column_widths(widths: &[u32]) -> Self {
        Self {
            columns: widths.iter().map(|w| Column { width: Some(*w) }).collect(),
            ..Default::default()
        }
    }

    /// Creates a table whose column widths scale to their content, never
    /// narrower than `min_column_widths` and never wider than `full_width` in
    /// total.
    pub fn auto_width(full_width: u32, min_column_widths: &[u32]) -> Result<Self, TableError> {
        let total = min_column_widths
            .iter()
            .try_fold(0u32, |acc, w| acc.checked_add(*w))
            .ok_or(TableError::Overflow {
                argument: "min_column_widths",
            })?;

        if total > full_width {
            return Err(TableError::OutOfRange {
                argument: "min_column_widths",
                reason: format!(
                    "combined minimum width {} exceeds the maximum table width {}",
                    total, full_width
                ),
            });
        }

        log::trace!(
            "Created auto-width table: {} columns, minimum {} of {}",
            min_column_widths.len(),
            total,
            full_width
        );

        Ok(Self {
            columns: vec![Column::default(); min_column_widths.len()],
            rows: Vec::new(),
            full_width: Some(full_width),
            min_column_widths: Some(min_column_widths.to_vec()),
        })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Appends one row built from `values`.
    ///
    /// Fewer values than columns leaves the trailing cells empty. `None` is
    /// rejected as an invalid argument and more values than columns as out of
    /// range; in both cases no row is added.
    pub fn add_row(&mut self, values: impl Into<Option<Vec<CellData>>>) -> Result<&mut Self, TableError> {
        let values = values.into().ok_or(TableError::InvalidArgument {
            argument: "values",
            reason: "row values cannot be absent",
        })?;

        let columns = self.column_count();
        if values.len() > columns {
            return Err(TableError::OutOfRange {
                argument: "values",
                reason: format!(
                    "number of values to add ({}) is greater than the number of columns in the table ({})",
                    values.len(),
                    columns
                ),
            });
        }

        let mut cells: Vec<Cell> = values
            .into_iter()
            .map(|value| {
                let mut cell = Cell::new();
                cell.add_data(value);
                cell
            })
            .collect();
        cells.resize_with(columns, Cell::new);

        self.rows.push(Row { cells });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlainText;

    #[test]
    fn test_add_row_dispatches_payloads() {
        let mut table = Table::with_columns(3);
        let para = Paragraph::from_text("kept", StyleName::Heading2);
        table.add_row(crate::cells![42, "x", para.clone()]).unwrap();

        assert_eq!(table.row_count(), 1);
        let row = &table.rows[0];
        assert_eq!(row.cells.len(), 3);
        assert_eq!(row.cells[0].plain_text(), "42");
        assert_eq!(row.cells[1].plain_text(), "x");
        assert_eq!(row.cells[2].elements, vec![ContentNode::Paragraph(para)]);
    }

    #[test]
    fn test_add_row_pads_missing_cells() {
        let mut table = Table::with_columns(4);
        table.add_row(crate::cells![1.5]).unwrap();
        let cells = &table.rows[0].cells;
        assert_eq!(cells.len(), 4);
        assert!(!cells[0].is_empty());
        assert!(cells[1..].iter().all(Cell::is_empty));
    }

    #[test]
    fn test_add_row_rejects_too_many_values() {
        let mut table = Table::with_columns(2);
        let err = table.add_row(crate::cells![1, 2, 3]).unwrap_err();
        assert!(matches!(err, TableError::OutOfRange { argument: "values", .. }));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_add_row_rejects_absent_values() {
        let mut table = Table::with_columns(2);
        let err = table.add_row(None).unwrap_err();
        assert!(matches!(err, TableError::InvalidArgument { .. }));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_add_row_chains() {
        let mut table = Table::with_columns(1);
        table
            .add_row(crate::cells!["a"])
            .unwrap()
            .add_row(crate::cells!["b"])
            .unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_styled_run_and_text_are_wrapped_in_paragraphs() {
        let mut cell = Cell::new();
        cell.add_data(FormattedText::bold().text("b").into())
            .add_data(Text::new("t").into())
            .add_data(Image::new("logo.png").into());
        assert_eq!(cell.elements[0].kind(), "paragraph");
        assert_eq!(cell.elements[1].kind(), "paragraph");
        assert_eq!(cell.elements[2].kind(), "image");
    }

    #[test]
    fn test_auto_width_records_minimums() {
        let table = Table::auto_width(100, &[20, 30, 50]).unwrap();
        assert_eq!(table.min_column_widths.as_deref(), Some(&[20, 30, 50][..]));
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.full_width, Some(100));
    }

    #[test]
    fn test_auto_width_rejects_excess_minimums() {
        let err = Table::auto_width(99, &[20, 30, 50]).unwrap_err();
        assert!(matches!(err, TableError::OutOfRange { .. }));
    }

    #[test]
    fn test_auto_width_detects_overflow() {
        let err = Table::auto_width(u32::MAX, &[u32::MAX, 1]).unwrap_err();
        assert_eq!(err, TableError::Overflow { argument: "min_column_widths" });
    }

    #[test]
    fn test_display_fallback() {
        struct Money(u32);
        impl std::fmt::Display for Money {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "${}", self.0)
            }
        }
        let mut cell = Cell::new();
        cell.add_data(CellData::display(Money(5)));
        assert_eq!(cell.plain_text(), "$5");
    }
}
