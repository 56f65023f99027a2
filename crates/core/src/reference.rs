//! Column, row and cell references.
//!
//! A reference is a 0-based coordinate plus a [`ReferenceKind`]. The kind only
//! controls the `$` prefix when printing and parsing; positional algorithms use
//! [`ColumnOrRowReference::eq_ignoring_kind`] and friends.
//!
//! Text forms:
//!
//! ```text
//! column   [$]<letters>            A, $B, xfd
//! row      [$]<1-based number>     1, $12
//! cell     <column><row>           A1, $A$1, c$4
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, Result};

/// Largest 0-based column value (`XFD`).
pub const MAX_COLUMN: u32 = 16_383;

/// Largest 0-based row value (`1048576`).
pub const MAX_ROW: u32 = 1_048_575;

/// Relative (`A1`) or absolute (`$A$1`) addressing for one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    #[default]
    Relative,
    Absolute,
}

impl ReferenceKind {
    /// The text that precedes a coordinate of this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            ReferenceKind::Relative => "",
            ReferenceKind::Absolute => "$",
        }
    }

    /// Build a column of this kind, failing when `value` is out of range.
    pub fn column(self, value: u32) -> Result<ColumnReference> {
        ColumnReference::new(value, self)
    }

    /// Build a row of this kind, failing when `value` is out of range.
    pub fn row(self, value: u32) -> Result<RowReference> {
        RowReference::new(value, self)
    }
}

/// Behaviour shared by [`ColumnReference`] and [`RowReference`].
///
/// Generic range and navigation code is written once against this trait.
pub trait ColumnOrRowReference:
    Copy + Eq + Ord + std::hash::Hash + fmt::Debug + fmt::Display + FromStr<Err = ReferenceError>
{
    /// "column" or "row", used in messages.
    const AXIS: &'static str;

    /// Largest valid 0-based value.
    const MAX_VALUE: u32;

    fn value(&self) -> u32;

    fn reference_kind(&self) -> ReferenceKind;

    /// Build a reference, failing when `value` is outside `0..=MAX_VALUE`.
    fn try_with(value: i64, kind: ReferenceKind) -> Result<Self>;

    /// Build a reference, clamping `value` into `0..=MAX_VALUE`.
    fn saturated(value: i64, kind: ReferenceKind) -> Self;

    fn set_value(self, value: u32) -> Result<Self> {
        if value == self.value() {
            return Ok(self);
        }
        Self::try_with(i64::from(value), self.reference_kind())
    }

    fn set_reference_kind(self, kind: ReferenceKind) -> Self {
        if kind == self.reference_kind() {
            return self;
        }
        Self::saturated(i64::from(self.value()), kind)
    }

    /// Add `delta`, failing when the result leaves the grid.
    fn add(self, delta: i64) -> Result<Self> {
        if delta == 0 {
            return Ok(self);
        }
        Self::try_with(i64::from(self.value()) + delta, self.reference_kind())
    }

    /// Add `delta`, clamping at the first or last column/row.
    fn add_saturated(self, delta: i64) -> Self {
        if delta == 0 {
            return self;
        }
        Self::saturated(i64::from(self.value()) + delta, self.reference_kind())
    }

    fn eq_ignoring_kind(&self, other: &Self) -> bool {
        self.value() == other.value()
    }

    fn cmp_ignoring_kind(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }

    fn to_relative(self) -> Self {
        self.set_reference_kind(ReferenceKind::Relative)
    }

    fn is_first(&self) -> bool {
        self.value() == 0
    }

    fn is_last(&self) -> bool {
        self.value() == Self::MAX_VALUE
    }
}

fn check_bounds(axis: &'static str, value: i64, max: u32) -> Result<u32> {
    if value < 0 || value > i64::from(max) {
        return Err(ReferenceError::OutOfBounds { axis, value, max });
    }
    Ok(value as u32)
}

fn clamp(value: i64, max: u32) -> u32 {
    value.clamp(0, i64::from(max)) as u32
}

// ============================================================================
// Column
// ============================================================================

/// A column coordinate, `A` (0) through `XFD` (16383).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnReference {
    value: u32,
    kind: ReferenceKind,
}

impl ColumnReference {
    pub const FIRST: ColumnReference = ColumnReference {
        value: 0,
        kind: ReferenceKind::Relative,
    };

    pub const LAST: ColumnReference = ColumnReference {
        value: MAX_COLUMN,
        kind: ReferenceKind::Relative,
    };

    pub fn new(value: u32, kind: ReferenceKind) -> Result<Self> {
        Self::try_with(i64::from(value), kind)
    }

    /// A relative column, failing when `value` is out of range.
    pub fn relative(value: u32) -> Result<Self> {
        Self::new(value, ReferenceKind::Relative)
    }

    /// The column letters without any `$` prefix.
    pub fn letters(&self) -> String {
        column_letters(self.value)
    }
}

impl ColumnOrRowReference for ColumnReference {
    const AXIS: &'static str = "column";
    const MAX_VALUE: u32 = MAX_COLUMN;

    fn value(&self) -> u32 {
        self.value
    }

    fn reference_kind(&self) -> ReferenceKind {
        self.kind
    }

    fn try_with(value: i64, kind: ReferenceKind) -> Result<Self> {
        let value = check_bounds(Self::AXIS, value, MAX_COLUMN)?;
        Ok(Self { value, kind })
    }

    fn saturated(value: i64, kind: ReferenceKind) -> Self {
        Self {
            value: clamp(value, MAX_COLUMN),
            kind,
        }
    }
}

impl fmt::Display for ColumnReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), column_letters(self.value))
    }
}

impl FromStr for ColumnReference {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        let (kind, start) = scan_dollar(text, 0);
        let end = scan_letters(text, start);
        if end == start {
            return Err(missing_or_invalid(text, start, "column"));
        }
        if end != text.len() {
            return Err(ReferenceError::invalid_character(text, end));
        }
        column_from_letters(&text[start..end], kind)
    }
}

// ============================================================================
// Row
// ============================================================================

/// A row coordinate, printed 1-based (`1` through `1048576`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowReference {
    value: u32,
    kind: ReferenceKind,
}

impl RowReference {
    pub const FIRST: RowReference = RowReference {
        value: 0,
        kind: ReferenceKind::Relative,
    };

    pub const LAST: RowReference = RowReference {
        value: MAX_ROW,
        kind: ReferenceKind::Relative,
    };

    pub fn new(value: u32, kind: ReferenceKind) -> Result<Self> {
        Self::try_with(i64::from(value), kind)
    }

    /// A relative row, failing when `value` is out of range.
    pub fn relative(value: u32) -> Result<Self> {
        Self::new(value, ReferenceKind::Relative)
    }
}

impl ColumnOrRowReference for RowReference {
    const AXIS: &'static str = "row";
    const MAX_VALUE: u32 = MAX_ROW;

    fn value(&self) -> u32 {
        self.value
    }

    fn reference_kind(&self) -> ReferenceKind {
        self.kind
    }

    fn try_with(value: i64, kind: ReferenceKind) -> Result<Self> {
        let value = check_bounds(Self::AXIS, value, MAX_ROW)?;
        Ok(Self { value, kind })
    }

    fn saturated(value: i64, kind: ReferenceKind) -> Self {
        Self {
            value: clamp(value, MAX_ROW),
            kind,
        }
    }
}

impl fmt::Display for RowReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), u64::from(self.value) + 1)
    }
}

impl FromStr for RowReference {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        let (kind, start) = scan_dollar(text, 0);
        let end = scan_digits(text, start)?;
        if end == start {
            return Err(missing_or_invalid(text, start, "row"));
        }
        if end != text.len() {
            return Err(ReferenceError::invalid_character(text, end));
        }
        row_from_digits(&text[start..end], kind)
    }
}

// ============================================================================
// Cell
// ============================================================================

/// A single cell, e.g. `B7` or `$B$7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellReference {
    column: ColumnReference,
    row: RowReference,
}

impl CellReference {
    pub const A1: CellReference = CellReference {
        column: ColumnReference::FIRST,
        row: RowReference::FIRST,
    };

    pub fn new(column: ColumnReference, row: RowReference) -> Self {
        Self { column, row }
    }

    /// A relative cell from 0-based coordinates.
    pub fn at(column: u32, row: u32) -> Result<Self> {
        Ok(Self::new(
            ColumnReference::relative(column)?,
            RowReference::relative(row)?,
        ))
    }

    pub fn column(&self) -> ColumnReference {
        self.column
    }

    pub fn row(&self) -> RowReference {
        self.row
    }

    pub fn set_column(self, column: ColumnReference) -> Self {
        Self { column, ..self }
    }

    pub fn set_row(self, row: RowReference) -> Self {
        Self { row, ..self }
    }

    /// Move by the given deltas, clamping at the grid edges.
    pub fn add_saturated(self, columns: i64, rows: i64) -> Self {
        Self {
            column: self.column.add_saturated(columns),
            row: self.row.add_saturated(rows),
        }
    }

    pub fn eq_ignoring_kind(&self, other: &Self) -> bool {
        self.column.eq_ignoring_kind(&other.column) && self.row.eq_ignoring_kind(&other.row)
    }

    pub fn to_relative(self) -> Self {
        self.set_reference_kind(ReferenceKind::Relative)
    }

    pub fn to_absolute(self) -> Self {
        self.set_reference_kind(ReferenceKind::Absolute)
    }

    /// Set the kind of both coordinates.
    pub fn set_reference_kind(self, kind: ReferenceKind) -> Self {
        Self {
            column: self.column.set_reference_kind(kind),
            row: self.row.set_reference_kind(kind),
        }
    }
}

impl fmt::Display for CellReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellReference {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        let (column_kind, letters_start) = scan_dollar(text, 0);
        let letters_end = scan_letters(text, letters_start);
        if letters_end == letters_start {
            return Err(missing_or_invalid(text, letters_start, "cell"));
        }

        let (row_kind, digits_start) = scan_dollar(text, letters_end);
        let digits_end = scan_digits(text, digits_start)?;
        if digits_end == digits_start {
            return Err(missing_or_invalid(text, digits_start, "row"));
        }
        if digits_end != text.len() {
            return Err(ReferenceError::invalid_character(text, digits_end));
        }

        Ok(Self::new(
            column_from_letters(&text[letters_start..letters_end], column_kind)?,
            row_from_digits(&text[digits_start..digits_end], row_kind)?,
        ))
    }
}

text_serde!(ColumnReference);
text_serde!(RowReference);
text_serde!(CellReference);

// ============================================================================
// Text helpers
// ============================================================================

/// Convert 0-based column index to letter(s): 0=A, 25=Z, 26=AA, ...
pub fn column_letters(value: u32) -> String {
    let mut result = String::new();
    let mut n = value;
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// True when `text` parses as a cell reference.
pub fn is_cell_reference_text(text: &str) -> bool {
    text.parse::<CellReference>().is_ok()
}

fn scan_dollar(text: &str, position: usize) -> (ReferenceKind, usize) {
    if text[position..].starts_with('$') {
        (ReferenceKind::Absolute, position + 1)
    } else {
        (ReferenceKind::Relative, position)
    }
}

fn scan_letters(text: &str, start: usize) -> usize {
    text[start..]
        .find(|c: char| !c.is_ascii_alphabetic())
        .map_or(text.len(), |i| start + i)
}

/// Scan a row number, rejecting a leading zero.
fn scan_digits(text: &str, start: usize) -> Result<usize> {
    if text[start..].starts_with('0') {
        return Err(ReferenceError::invalid_character(text, start));
    }
    Ok(text[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| start + i))
}

fn missing_or_invalid(text: &str, position: usize, what: &'static str) -> ReferenceError {
    if position >= text.len() {
        ReferenceError::Empty { what }
    } else {
        ReferenceError::invalid_character(text, position)
    }
}

fn column_from_letters(letters: &str, kind: ReferenceKind) -> Result<ColumnReference> {
    let mut value: i64 = 0;
    for c in letters.bytes() {
        value = value * 26 + i64::from(c.to_ascii_uppercase() - b'A') + 1;
        if value > i64::from(MAX_COLUMN) + 1 {
            break;
        }
    }
    ColumnReference::try_with(value - 1, kind)
}

fn row_from_digits(digits: &str, kind: ReferenceKind) -> Result<RowReference> {
    let mut value: i64 = 0;
    for c in digits.bytes() {
        value = value * 10 + i64::from(c - b'0');
        if value > i64::from(MAX_ROW) + 1 {
            break;
        }
    }
    RowReference::try_with(value - 1, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(text: &str) -> ColumnReference {
        text.parse().unwrap()
    }

    fn row(text: &str) -> RowReference {
        text.parse().unwrap()
    }

    fn cell(text: &str) -> CellReference {
        text.parse().unwrap()
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        assert_eq!(column_letters(MAX_COLUMN), "XFD");
    }

    #[test]
    fn test_column_out_of_bounds() {
        assert!(ColumnReference::relative(MAX_COLUMN).is_ok());
        let err = ColumnReference::relative(MAX_COLUMN + 1).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::OutOfBounds { axis: "column", value: 16_384, max: MAX_COLUMN }
        );
        assert!(RowReference::relative(MAX_ROW + 1).is_err());
    }

    #[test]
    fn test_equal_values_compare_equal() {
        let a = ColumnReference::new(3, ReferenceKind::Absolute).unwrap();
        let b = ColumnReference::new(3, ReferenceKind::Absolute).unwrap();
        assert_eq!(a, b);

        let far = ColumnReference::relative(9_000).unwrap();
        assert_eq!(far, ColumnReference::relative(9_000).unwrap());
    }

    #[test]
    fn test_kind_is_ignored_by_positional_equality() {
        let relative = col("C");
        let absolute = col("$C");
        assert_ne!(relative, absolute);
        assert!(relative.eq_ignoring_kind(&absolute));
        assert_eq!(relative.cmp_ignoring_kind(&absolute), Ordering::Equal);
        assert_eq!(absolute.to_relative(), relative);
    }

    #[test]
    fn test_set_value_and_kind() {
        let c = col("C");
        assert_eq!(c.set_value(2).unwrap(), c);
        assert_eq!(c.set_value(3).unwrap(), col("D"));
        assert!(c.set_value(MAX_COLUMN + 1).is_err());
        assert_eq!(c.set_reference_kind(ReferenceKind::Absolute), col("$C"));
    }

    #[test]
    fn test_add() {
        assert_eq!(col("B").add(1).unwrap(), col("C"));
        assert!(col("A").add(-1).is_err());
        assert_eq!(row("1").add(9).unwrap(), row("10"));
    }

    #[test]
    fn test_add_saturated() {
        assert_eq!(col("A").add_saturated(-5), col("A"));
        assert_eq!(col("XFC").add_saturated(10), col("XFD"));
        assert_eq!(row("1048575").add_saturated(3), RowReference::LAST);
        assert_eq!(col("$B").add_saturated(1), col("$C"));
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(col("A").value(), 0);
        assert_eq!(col("aa").value(), 26);
        assert_eq!(col("$XFD").value(), MAX_COLUMN);
        assert_eq!(col("$B").reference_kind(), ReferenceKind::Absolute);
        assert!(matches!(
            "XFE".parse::<ColumnReference>(),
            Err(ReferenceError::OutOfBounds { .. })
        ));
        assert!(matches!("".parse::<ColumnReference>(), Err(ReferenceError::Empty { .. })));
    }

    #[test]
    fn test_parse_column_invalid_character() {
        let err = "AB1".parse::<ColumnReference>().unwrap_err();
        assert_eq!(
            err,
            ReferenceError::InvalidCharacter { character: '1', position: 2, text: "AB1".into() }
        );
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(row("1").value(), 0);
        assert_eq!(row("$12").value(), 11);
        assert_eq!(row("1048576").value(), MAX_ROW);
        assert!("1048577".parse::<RowReference>().is_err());
        let err = "0".parse::<RowReference>().unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidCharacter { character: '0', position: 0, .. }));
        let err = "1x".parse::<RowReference>().unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidCharacter { character: 'x', position: 1, .. }));
    }

    #[test]
    fn test_parse_cell() {
        let c = cell("$A$1");
        assert_eq!(c.column().value(), 0);
        assert_eq!(c.row().value(), 0);
        assert_eq!(c.column().reference_kind(), ReferenceKind::Absolute);
        assert_eq!(c.row().reference_kind(), ReferenceKind::Absolute);

        let c = cell("c$4");
        assert_eq!(c.to_string(), "C$4");
        assert_eq!(c.column().reference_kind(), ReferenceKind::Relative);
        assert_eq!(c.row().reference_kind(), ReferenceKind::Absolute);
    }

    #[test]
    fn test_parse_cell_errors() {
        let err = "A1!".parse::<CellReference>().unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidCharacter { character: '!', position: 2, .. }));

        let err = "1A".parse::<CellReference>().unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidCharacter { character: '1', position: 0, .. }));

        let err = "A$$1".parse::<CellReference>().unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidCharacter { character: '$', position: 2, .. }));

        assert!(matches!("A".parse::<CellReference>(), Err(ReferenceError::Empty { what: "row" })));
        assert!(matches!("".parse::<CellReference>(), Err(ReferenceError::Empty { .. })));
    }

    #[test]
    fn test_cell_round_trip() {
        for text in ["A1", "$A$1", "C$4", "$XFD1048576", "AB12"] {
            assert_eq!(cell(text).to_string(), text);
        }
    }

    #[test]
    fn test_cell_eq_ignoring_kind() {
        assert!(cell("$B$2").eq_ignoring_kind(&cell("B2")));
        assert!(!cell("B2").eq_ignoring_kind(&cell("B3")));
        assert_eq!(cell("$B$2").to_relative(), cell("B2"));
        assert_eq!(cell("B2").to_absolute(), cell("$B$2"));
    }

    #[test]
    fn test_cell_add_saturated() {
        assert_eq!(cell("B2").add_saturated(-5, -5), cell("A1"));
        assert_eq!(cell("B2").add_saturated(1, 2), cell("C4"));
    }

    #[test]
    fn test_sorting_columns_ignoring_kind() {
        let mut columns = vec![col("$C"), col("A"), col("$B")];
        columns.sort_by(|a, b| a.cmp_ignoring_kind(b));
        let values: Vec<u32> = columns.iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_is_cell_reference_text() {
        assert!(is_cell_reference_text("A1"));
        assert!(is_cell_reference_text("xfd1048576"));
        assert!(!is_cell_reference_text("XFE1"));
        assert!(!is_cell_reference_text("Revenue"));
        assert!(!is_cell_reference_text("A0"));
    }
}
