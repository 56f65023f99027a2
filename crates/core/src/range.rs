//! Inclusive rectangular ranges: cell ranges (`A1:B2`), column ranges (`B:D`)
//! and row ranges (`12:34`).
//!
//! Ranges are always normalised so `begin <= end` on every axis. A single
//! reference is a degenerate range and prints without the `:` part.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{ReferenceError, Result};
use crate::reference::{CellReference, ColumnOrRowReference, ColumnReference, ReferenceKind, RowReference};

/// A range of columns or rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceRange<R> {
    begin: R,
    end: R,
}

/// `B:D`
pub type ColumnRange = ReferenceRange<ColumnReference>;

/// `12:34`
pub type RowRange = ReferenceRange<RowReference>;

impl<R: ColumnOrRowReference> ReferenceRange<R> {
    /// Build a range from two ends in either order.
    pub fn new(a: R, b: R) -> Self {
        if a.cmp_ignoring_kind(&b) == Ordering::Greater {
            Self { begin: b, end: a }
        } else {
            Self { begin: a, end: b }
        }
    }

    pub fn single(reference: R) -> Self {
        Self {
            begin: reference,
            end: reference,
        }
    }

    /// Every column (or row) of the grid.
    pub fn all() -> Self {
        Self {
            begin: R::saturated(0, ReferenceKind::Relative),
            end: R::saturated(i64::from(R::MAX_VALUE), ReferenceKind::Relative),
        }
    }

    pub fn begin(&self) -> R {
        self.begin
    }

    pub fn end(&self) -> R {
        self.end
    }

    pub fn count(&self) -> u32 {
        self.end.value() - self.begin.value() + 1
    }

    pub fn is_single(&self) -> bool {
        self.begin.eq_ignoring_kind(&self.end)
    }

    pub fn contains(&self, reference: R) -> bool {
        reference.value() >= self.begin.value() && reference.value() <= self.end.value()
    }

    /// Move both ends, clamping at the grid edges.
    pub fn add_saturated(self, delta: i64) -> Self {
        Self::new(self.begin.add_saturated(delta), self.end.add_saturated(delta))
    }

    /// Visit every column (or row) from `begin` to `end`.
    pub fn iter(&self) -> impl Iterator<Item = R> + '_ {
        let kind = self.begin.reference_kind();
        (self.begin.value()..=self.end.value()).map(move |v| R::saturated(i64::from(v), kind))
    }
}

impl<R: ColumnOrRowReference> fmt::Display for ReferenceRange<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.begin == self.end {
            write!(f, "{}", self.begin)
        } else {
            write!(f, "{}:{}", self.begin, self.end)
        }
    }
}

impl<R: ColumnOrRowReference> FromStr for ReferenceRange<R> {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        let (begin, end) = split_range(text)?;
        Ok(Self::new(begin, end))
    }
}

impl<R: ColumnOrRowReference> serde::Serialize for ReferenceRange<R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, R: ColumnOrRowReference> serde::Deserialize<'de> for ReferenceRange<R> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse `<ref>` or `<ref>:<ref>`, reporting errors against the whole text.
fn split_range<T: FromStr<Err = ReferenceError> + Copy>(text: &str) -> Result<(T, T)> {
    match text.split_once(':') {
        Some((left, right)) => {
            let begin = left.parse::<T>().map_err(|e| e.within(text, 0))?;
            let end = right
                .parse::<T>()
                .map_err(|e| e.within(text, left.len() + 1))?;
            Ok((begin, end))
        }
        None => {
            let single = text.parse::<T>()?;
            Ok((single, single))
        }
    }
}

// ============================================================================
// Cell range
// ============================================================================

/// A rectangle of cells, `begin` is the top-left and `end` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRange {
    begin: CellReference,
    end: CellReference,
}

impl CellRange {
    /// Build a range from any two opposite corners.
    pub fn new(a: CellReference, b: CellReference) -> Self {
        let columns = ColumnRange::new(a.column(), b.column());
        let rows = RowRange::new(a.row(), b.row());
        Self::from_ranges(columns, rows)
    }

    pub fn with_single(cell: CellReference) -> Self {
        Self {
            begin: cell,
            end: cell,
        }
    }

    pub fn from_ranges(columns: ColumnRange, rows: RowRange) -> Self {
        Self {
            begin: CellReference::new(columns.begin(), rows.begin()),
            end: CellReference::new(columns.end(), rows.end()),
        }
    }

    /// Every row of the given columns, e.g. `B:C` becomes `B1:C1048576`.
    pub fn all_rows_of(columns: ColumnRange) -> Self {
        Self::from_ranges(columns, RowRange::all())
    }

    /// Every column of the given rows, e.g. `3:4` becomes `A3:XFD4`.
    pub fn all_columns_of(rows: RowRange) -> Self {
        Self::from_ranges(ColumnRange::all(), rows)
    }

    pub fn begin(&self) -> CellReference {
        self.begin
    }

    pub fn end(&self) -> CellReference {
        self.end
    }

    pub fn top_left(&self) -> CellReference {
        self.begin
    }

    pub fn top_right(&self) -> CellReference {
        CellReference::new(self.end.column(), self.begin.row())
    }

    pub fn bottom_left(&self) -> CellReference {
        CellReference::new(self.begin.column(), self.end.row())
    }

    pub fn bottom_right(&self) -> CellReference {
        self.end
    }

    pub fn column_range(&self) -> ColumnRange {
        ColumnRange::new(self.begin.column(), self.end.column())
    }

    pub fn row_range(&self) -> RowRange {
        RowRange::new(self.begin.row(), self.end.row())
    }

    pub fn width(&self) -> u32 {
        self.column_range().count()
    }

    pub fn height(&self) -> u32 {
        self.row_range().count()
    }

    /// Number of cells; a whole-grid range does not fit in `u32`.
    pub fn count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn is_single_cell(&self) -> bool {
        self.begin.eq_ignoring_kind(&self.end)
    }

    /// Kind-insensitive containment test.
    pub fn contains(&self, cell: CellReference) -> bool {
        self.column_range().contains(cell.column()) && self.row_range().contains(cell.row())
    }

    pub fn add_saturated(self, columns: i64, rows: i64) -> Self {
        Self::new(
            self.begin.add_saturated(columns, rows),
            self.end.add_saturated(columns, rows),
        )
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.begin == self.end {
            write!(f, "{}", self.begin)
        } else {
            write!(f, "{}:{}", self.begin, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        let (begin, end) = split_range::<CellReference>(text)?;
        Ok(Self::new(begin, end))
    }
}

text_serde!(CellRange);
