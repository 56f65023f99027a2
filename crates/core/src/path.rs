//! Traversal orders over the cells of a [`CellRange`].
//!
//! The first two letters name the inner direction, the last two the outer:
//!
//! ```text
//! LRTD  left-right inside a row, rows top-down        A1 B1 C1 A2 B2 ...
//! BULR  bottom-up inside a column, columns left-right A3 A2 A1 B3 B2 ...
//! ```
//!
//! Each path supplies a comparator consistent with its order and a lazy
//! iterator. The iterator is a forward cursor: it never allocates and can be
//! dropped early.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, Result};
use crate::range::CellRange;
use crate::reference::{CellReference, ColumnOrRowReference, ColumnReference, RowReference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CellRangePath {
    /// Left to right, top down.
    Lrtd,
    /// Right to left, top down.
    Rltd,
    /// Left to right, bottom up.
    Lrbu,
    /// Right to left, bottom up.
    Rlbu,
    /// Top down, left to right.
    Tdlr,
    /// Top down, right to left.
    Tdrl,
    /// Bottom up, left to right.
    Bulr,
    /// Bottom up, right to left.
    Burl,
}

impl CellRangePath {
    pub const ALL: [CellRangePath; 8] = [
        CellRangePath::Lrtd,
        CellRangePath::Rltd,
        CellRangePath::Lrbu,
        CellRangePath::Rlbu,
        CellRangePath::Tdlr,
        CellRangePath::Tdrl,
        CellRangePath::Bulr,
        CellRangePath::Burl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CellRangePath::Lrtd => "LRTD",
            CellRangePath::Rltd => "RLTD",
            CellRangePath::Lrbu => "LRBU",
            CellRangePath::Rlbu => "RLBU",
            CellRangePath::Tdlr => "TDLR",
            CellRangePath::Tdrl => "TDRL",
            CellRangePath::Bulr => "BULR",
            CellRangePath::Burl => "BURL",
        }
    }

    /// True when the path walks a whole row before moving to the next one.
    fn row_major(self) -> bool {
        matches!(
            self,
            CellRangePath::Lrtd | CellRangePath::Rltd | CellRangePath::Lrbu | CellRangePath::Rlbu
        )
    }

    fn left_to_right(self) -> bool {
        matches!(
            self,
            CellRangePath::Lrtd | CellRangePath::Lrbu | CellRangePath::Tdlr | CellRangePath::Bulr
        )
    }

    fn top_down(self) -> bool {
        matches!(
            self,
            CellRangePath::Lrtd | CellRangePath::Rltd | CellRangePath::Tdlr | CellRangePath::Tdrl
        )
    }

    /// Compare two cells in visiting order, ignoring reference kinds.
    pub fn compare(self, a: &CellReference, b: &CellReference) -> Ordering {
        let columns = directed(a.column().value(), b.column().value(), self.left_to_right());
        let rows = directed(a.row().value(), b.row().value(), self.top_down());
        if self.row_major() {
            rows.then(columns)
        } else {
            columns.then(rows)
        }
    }

    /// Sort cells in this path's order.
    pub fn sort(self, cells: &mut [CellReference]) {
        cells.sort_by(|a, b| self.compare(a, b));
    }

    /// The first cell visited in `range`.
    pub fn first(self, range: &CellRange) -> CellReference {
        CellReference::new(self.first_column(range), self.first_row(range))
    }

    fn first_column(self, range: &CellRange) -> ColumnReference {
        if self.left_to_right() {
            range.begin().column()
        } else {
            range.end().column()
        }
    }

    fn first_row(self, range: &CellRange) -> RowReference {
        if self.top_down() {
            range.begin().row()
        } else {
            range.end().row()
        }
    }

    /// Position of `cell` in this path's visiting order, or `None` when the
    /// cell lies outside `range`.
    pub fn position(self, range: &CellRange, cell: &CellReference) -> Option<u64> {
        if !range.contains(*cell) {
            return None;
        }
        let x = u64::from(cell.column().value().abs_diff(self.first_column(range).value()));
        let y = u64::from(cell.row().value().abs_diff(self.first_row(range).value()));
        Some(if self.row_major() {
            y * u64::from(range.width()) + x
        } else {
            x * u64::from(range.height()) + y
        })
    }

    /// The cell visited at `index`, the inverse of [`CellRangePath::position`].
    pub fn cell_at(self, range: &CellRange, index: u64) -> Option<CellReference> {
        if index >= range.count() {
            return None;
        }
        let width = u64::from(range.width());
        let height = u64::from(range.height());
        let (x, y) = if self.row_major() {
            (index % width, index / width)
        } else {
            (index / height, index % height)
        };
        Some(self.offset_cell(range, x as u32, y as u32))
    }

    fn offset_cell(self, range: &CellRange, x: u32, y: u32) -> CellReference {
        let column = self.first_column(range);
        let row = self.first_row(range);
        let dx = if self.left_to_right() { i64::from(x) } else { -i64::from(x) };
        let dy = if self.top_down() { i64::from(y) } else { -i64::from(y) };
        CellReference::new(column.add_saturated(dx), row.add_saturated(dy))
    }

    /// Lazily visit every cell of `range` exactly once.
    pub fn cells(self, range: CellRange) -> PathCells {
        PathCells {
            path: self,
            range,
            x: 0,
            y: 0,
            remaining: range.count(),
        }
    }
}

fn directed(a: u32, b: u32, ascending: bool) -> Ordering {
    if ascending {
        a.cmp(&b)
    } else {
        b.cmp(&a)
    }
}

impl fmt::Display for CellRangePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellRangePath {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        CellRangePath::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(text))
            .ok_or_else(|| {
                if text.is_empty() {
                    ReferenceError::Empty { what: "path" }
                } else {
                    ReferenceError::invalid_character(text, 0)
                }
            })
    }
}

/// Iterator returned by [`CellRangePath::cells`].
///
/// `x` counts steps along columns and `y` along rows from the path's first
/// cell; the inner axis advances first.
#[derive(Debug, Clone)]
pub struct PathCells {
    path: CellRangePath,
    range: CellRange,
    x: u32,
    y: u32,
    remaining: u64,
}

impl Iterator for PathCells {
    type Item = CellReference;

    fn next(&mut self) -> Option<CellReference> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.path.offset_cell(&self.range, self.x, self.y);
        self.remaining -= 1;

        if self.path.row_major() {
            self.x += 1;
            if self.x == self.range.width() {
                self.x = 0;
                self.y += 1;
            }
        } else {
            self.y += 1;
            if self.y == self.range.height() {
                self.y = 0;
                self.x += 1;
            }
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for PathCells {}

/// A fixed-length buffer with one slot per cell of a range, indexed by the
/// cell's position along a path. Used when cells are gathered out of order
/// (sorting, filling) and read back in path order. Slots are allocated up
/// front, so ranges are limited to [`PathBuffer::MAX_CELLS`].
#[derive(Debug, Clone)]
pub struct PathBuffer<T> {
    path: CellRangePath,
    range: CellRange,
    slots: Vec<Option<T>>,
}

impl<T> PathBuffer<T> {
    /// One full column.
    pub const MAX_CELLS: u64 = 1 << 20;

    pub fn new(path: CellRangePath, range: CellRange) -> Result<Self> {
        let count = range.count();
        let len = match usize::try_from(count) {
            Ok(len) if count <= Self::MAX_CELLS => len,
            _ => {
                return Err(ReferenceError::TooLarge {
                    range: range.to_string(),
                    count,
                    max: Self::MAX_CELLS,
                })
            }
        };
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Ok(Self { path, range, slots })
    }

    /// Store `value` for `cell`; returns the previous value. Cells outside the
    /// range are ignored and `value` is handed back.
    pub fn insert(&mut self, cell: &CellReference, value: T) -> std::result::Result<Option<T>, T> {
        match self.slot(cell) {
            Some(slot) => Ok(slot.replace(value)),
            None => Err(value),
        }
    }

    pub fn get(&self, cell: &CellReference) -> Option<&T> {
        let index = self.path.position(&self.range, cell)?;
        self.slots.get(usize::try_from(index).ok()?)?.as_ref()
    }

    fn slot(&mut self, cell: &CellReference) -> Option<&mut Option<T>> {
        let index = self.path.position(&self.range, cell)?;
        self.slots.get_mut(usize::try_from(index).ok()?)
    }

    /// Filled slots in path order.
    pub fn into_cells(self) -> impl Iterator<Item = (CellReference, T)> {
        let path = self.path;
        let range = self.range;
        self.slots.into_iter().enumerate().filter_map(move |(i, slot)| {
            let value = slot?;
            let cell = path.cell_at(&range, i as u64)?;
            Some((cell, value))
        })
    }
}
