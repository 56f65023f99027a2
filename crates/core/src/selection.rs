//! The seven selection kinds as one closed enum.
//!
//! Kind-specific operations return [`ReferenceError::Unsupported`] for the
//! kinds they do not apply to instead of panicking or returning sentinels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::anchor::SelectionAnchor;
use crate::error::{ReferenceError, Result};
use crate::label::LabelName;
use crate::range::{CellRange, ColumnRange, RowRange};
use crate::reference::{CellReference, ColumnOrRowReference, ColumnReference, RowReference};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selection {
    Cell(CellReference),
    CellRange(CellRange),
    Column(ColumnReference),
    ColumnRange(ColumnRange),
    Row(RowReference),
    RowRange(RowRange),
    Label(LabelName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionKind {
    Cell,
    CellRange,
    Column,
    ColumnRange,
    Row,
    RowRange,
    Label,
}

impl SelectionKind {
    pub const ALL: [SelectionKind; 7] = [
        SelectionKind::Cell,
        SelectionKind::CellRange,
        SelectionKind::Column,
        SelectionKind::ColumnRange,
        SelectionKind::Row,
        SelectionKind::RowRange,
        SelectionKind::Label,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SelectionKind::Cell => "cell",
            SelectionKind::CellRange => "cell-range",
            SelectionKind::Column => "column",
            SelectionKind::ColumnRange => "column-range",
            SelectionKind::Row => "row",
            SelectionKind::RowRange => "row-range",
            SelectionKind::Label => "label",
        }
    }

    /// Parse `text` as a selection of exactly this kind.
    pub fn parse(self, text: &str) -> Result<Selection> {
        Ok(match self {
            SelectionKind::Cell => Selection::Cell(text.parse()?),
            SelectionKind::CellRange => Selection::CellRange(text.parse()?),
            SelectionKind::Column => Selection::Column(text.parse()?),
            SelectionKind::ColumnRange => Selection::ColumnRange(text.parse()?),
            SelectionKind::Row => Selection::Row(text.parse()?),
            SelectionKind::RowRange => Selection::RowRange(text.parse()?),
            SelectionKind::Label => Selection::Label(text.parse()?),
        })
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionKind {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        SelectionKind::ALL
            .into_iter()
            .find(|k| k.name() == text)
            .ok_or_else(|| {
                if text.is_empty() {
                    ReferenceError::Empty { what: "selection kind" }
                } else {
                    ReferenceError::invalid_character(text, 0)
                }
            })
    }
}

/// The selections a formula expression can refer to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionReference {
    Cell(CellReference),
    CellRange(CellRange),
    Label(LabelName),
}

impl fmt::Display for ExpressionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionReference::Cell(cell) => fmt::Display::fmt(cell, f),
            ExpressionReference::CellRange(range) => fmt::Display::fmt(range, f),
            ExpressionReference::Label(label) => fmt::Display::fmt(label, f),
        }
    }
}

impl Selection {
    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::Cell(_) => SelectionKind::Cell,
            Selection::CellRange(_) => SelectionKind::CellRange,
            Selection::Column(_) => SelectionKind::Column,
            Selection::ColumnRange(_) => SelectionKind::ColumnRange,
            Selection::Row(_) => SelectionKind::Row,
            Selection::RowRange(_) => SelectionKind::RowRange,
            Selection::Label(_) => SelectionKind::Label,
        }
    }

    /// The anchor a freshly created anchored selection of this kind gets.
    pub fn default_anchor(&self) -> SelectionAnchor {
        match self {
            Selection::CellRange(_) => SelectionAnchor::BottomRight,
            Selection::ColumnRange(_) => SelectionAnchor::Right,
            Selection::RowRange(_) => SelectionAnchor::Bottom,
            Selection::Cell(_) | Selection::Column(_) | Selection::Row(_) | Selection::Label(_) => {
                SelectionAnchor::None
            }
        }
    }

    pub fn is_cell_kind(&self) -> bool {
        matches!(self, Selection::Cell(_) | Selection::CellRange(_))
    }

    pub fn is_column_kind(&self) -> bool {
        matches!(self, Selection::Column(_) | Selection::ColumnRange(_))
    }

    pub fn is_row_kind(&self) -> bool {
        matches!(self, Selection::Row(_) | Selection::RowRange(_))
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Selection::Label(_))
    }

    fn unsupported(&self, operation: &'static str) -> ReferenceError {
        ReferenceError::Unsupported {
            operation,
            kind: self.kind().name(),
        }
    }

    /// The cells covered by this selection; columns and rows cover the whole
    /// grid in the other direction.
    pub fn to_cell_range(&self) -> Result<CellRange> {
        match self {
            Selection::Cell(cell) => Ok(CellRange::with_single(*cell)),
            Selection::CellRange(range) => Ok(*range),
            Selection::Column(column) => Ok(CellRange::all_rows_of(ColumnRange::single(*column))),
            Selection::ColumnRange(columns) => Ok(CellRange::all_rows_of(*columns)),
            Selection::Row(row) => Ok(CellRange::all_columns_of(RowRange::single(*row))),
            Selection::RowRange(rows) => Ok(CellRange::all_columns_of(*rows)),
            Selection::Label(_) => Err(self.unsupported("to_cell_range")),
        }
    }

    pub fn to_expression_reference(&self) -> Result<ExpressionReference> {
        match self {
            Selection::Cell(cell) => Ok(ExpressionReference::Cell(*cell)),
            Selection::CellRange(range) => Ok(ExpressionReference::CellRange(*range)),
            Selection::Label(label) => Ok(ExpressionReference::Label(label.clone())),
            _ => Err(self.unsupported("to_expression_reference")),
        }
    }

    /// True when `cell` lies inside this selection, ignoring reference kinds.
    pub fn test_cell(&self, cell: &CellReference) -> Result<bool> {
        match self {
            Selection::Cell(c) => Ok(c.eq_ignoring_kind(cell)),
            Selection::CellRange(range) => Ok(range.contains(*cell)),
            Selection::Column(column) => Ok(column.eq_ignoring_kind(&cell.column())),
            Selection::ColumnRange(columns) => Ok(columns.contains(cell.column())),
            Selection::Row(row) => Ok(row.eq_ignoring_kind(&cell.row())),
            Selection::RowRange(rows) => Ok(rows.contains(cell.row())),
            Selection::Label(_) => Err(self.unsupported("test_cell")),
        }
    }

    /// The columns spanned, for every kind except rows and labels.
    pub fn column_range(&self) -> Result<ColumnRange> {
        match self {
            Selection::Cell(cell) => Ok(ColumnRange::single(cell.column())),
            Selection::CellRange(range) => Ok(range.column_range()),
            Selection::Column(column) => Ok(ColumnRange::single(*column)),
            Selection::ColumnRange(columns) => Ok(*columns),
            _ => Err(self.unsupported("column_range")),
        }
    }

    /// The rows spanned, for every kind except columns and labels.
    pub fn row_range(&self) -> Result<RowRange> {
        match self {
            Selection::Cell(cell) => Ok(RowRange::single(cell.row())),
            Selection::CellRange(range) => Ok(range.row_range()),
            Selection::Row(row) => Ok(RowRange::single(*row)),
            Selection::RowRange(rows) => Ok(*rows),
            _ => Err(self.unsupported("row_range")),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Cell(cell) => fmt::Display::fmt(cell, f),
            Selection::CellRange(range) => fmt::Display::fmt(range, f),
            Selection::Column(column) => fmt::Display::fmt(column, f),
            Selection::ColumnRange(columns) => fmt::Display::fmt(columns, f),
            Selection::Row(row) => fmt::Display::fmt(row, f),
            Selection::RowRange(rows) => fmt::Display::fmt(rows, f),
            Selection::Label(label) => fmt::Display::fmt(label, f),
        }
    }
}

/// Which kind a token most likely is, judged from its leading characters.
fn classify(token: &str) -> SelectionKind {
    let token = token.strip_prefix('$').unwrap_or(token);
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return SelectionKind::Row;
    }
    if token.trim_start_matches(|c: char| c.is_ascii_alphabetic()).is_empty() {
        SelectionKind::Column
    } else {
        SelectionKind::Cell
    }
}

impl FromStr for Selection {
    type Err = ReferenceError;

    /// Parse any selection: ranges when a `:` is present, otherwise a cell,
    /// column or row, falling back to a label.
    fn from_str(text: &str) -> Result<Self> {
        if let Some((left, _)) = text.split_once(':') {
            return match classify(left) {
                SelectionKind::Row => SelectionKind::RowRange.parse(text),
                SelectionKind::Column => SelectionKind::ColumnRange.parse(text),
                _ => SelectionKind::CellRange.parse(text),
            };
        }
        let kind = classify(text);
        kind.parse(text).or_else(|error| match kind {
            SelectionKind::Row => Err(error),
            _ => SelectionKind::Label.parse(text).map_err(|_| error),
        })
    }
}

text_serde!(Selection);

impl From<CellReference> for Selection {
    fn from(cell: CellReference) -> Self {
        Selection::Cell(cell)
    }
}

impl From<CellRange> for Selection {
    fn from(range: CellRange) -> Self {
        Selection::CellRange(range)
    }
}

impl From<ColumnReference> for Selection {
    fn from(column: ColumnReference) -> Self {
        Selection::Column(column)
    }
}

impl From<ColumnRange> for Selection {
    fn from(columns: ColumnRange) -> Self {
        Selection::ColumnRange(columns)
    }
}

impl From<RowReference> for Selection {
    fn from(row: RowReference) -> Self {
        Selection::Row(row)
    }
}

impl From<RowRange> for Selection {
    fn from(rows: RowRange) -> Self {
        Selection::RowRange(rows)
    }
}

impl From<LabelName> for Selection {
    fn from(label: LabelName) -> Self {
        Selection::Label(label)
    }
}
