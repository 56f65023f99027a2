//! Anchors and anchored selections.
//!
//! The anchor names the fixed corner (or edge) of a range while an extend
//! gesture moves the opposite one. Which anchors a selection accepts depends
//! on its kind:
//!
//! | kind                | anchors                                      |
//! |---------------------|----------------------------------------------|
//! | cell, column, row   | none                                         |
//! | cell-range          | top-left, top-right, bottom-left, bottom-right |
//! | column-range        | left, right                                  |
//! | row-range           | top, bottom                                  |
//! | label               | none and the four corners                    |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, Result};
use crate::range::{CellRange, ColumnRange, RowRange};
use crate::reference::{CellReference, ColumnReference, RowReference};
use crate::selection::{Selection, SelectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionAnchor {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Top,
    Bottom,
}

const NONE_ONLY: &[SelectionAnchor] = &[SelectionAnchor::None];

const CORNERS: &[SelectionAnchor] = &[
    SelectionAnchor::TopLeft,
    SelectionAnchor::TopRight,
    SelectionAnchor::BottomLeft,
    SelectionAnchor::BottomRight,
];

const LEFT_RIGHT: &[SelectionAnchor] = &[SelectionAnchor::Left, SelectionAnchor::Right];

const TOP_BOTTOM: &[SelectionAnchor] = &[SelectionAnchor::Top, SelectionAnchor::Bottom];

const NONE_OR_CORNERS: &[SelectionAnchor] = &[
    SelectionAnchor::None,
    SelectionAnchor::TopLeft,
    SelectionAnchor::TopRight,
    SelectionAnchor::BottomLeft,
    SelectionAnchor::BottomRight,
];

impl SelectionAnchor {
    pub const ALL: [SelectionAnchor; 9] = [
        SelectionAnchor::None,
        SelectionAnchor::Top,
        SelectionAnchor::Bottom,
        SelectionAnchor::Left,
        SelectionAnchor::Right,
        SelectionAnchor::TopLeft,
        SelectionAnchor::TopRight,
        SelectionAnchor::BottomLeft,
        SelectionAnchor::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SelectionAnchor::None => "none",
            SelectionAnchor::Top => "top",
            SelectionAnchor::Bottom => "bottom",
            SelectionAnchor::Left => "left",
            SelectionAnchor::Right => "right",
            SelectionAnchor::TopLeft => "top-left",
            SelectionAnchor::TopRight => "top-right",
            SelectionAnchor::BottomLeft => "bottom-left",
            SelectionAnchor::BottomRight => "bottom-right",
        }
    }

    /// The anchors a selection of `kind` accepts.
    pub fn compatible(kind: SelectionKind) -> &'static [SelectionAnchor] {
        match kind {
            SelectionKind::Cell | SelectionKind::Column | SelectionKind::Row => NONE_ONLY,
            SelectionKind::CellRange => CORNERS,
            SelectionKind::ColumnRange => LEFT_RIGHT,
            SelectionKind::RowRange => TOP_BOTTOM,
            SelectionKind::Label => NONE_OR_CORNERS,
        }
    }

    pub fn is_compatible(self, kind: SelectionKind) -> bool {
        Self::compatible(kind).contains(&self)
    }

    pub fn horizontal(self) -> Option<Horizontal> {
        match self {
            SelectionAnchor::Left | SelectionAnchor::TopLeft | SelectionAnchor::BottomLeft => {
                Some(Horizontal::Left)
            }
            SelectionAnchor::Right | SelectionAnchor::TopRight | SelectionAnchor::BottomRight => {
                Some(Horizontal::Right)
            }
            _ => None,
        }
    }

    pub fn vertical(self) -> Option<Vertical> {
        match self {
            SelectionAnchor::Top | SelectionAnchor::TopLeft | SelectionAnchor::TopRight => {
                Some(Vertical::Top)
            }
            SelectionAnchor::Bottom | SelectionAnchor::BottomLeft | SelectionAnchor::BottomRight => {
                Some(Vertical::Bottom)
            }
            _ => None,
        }
    }

    pub fn from_parts(horizontal: Option<Horizontal>, vertical: Option<Vertical>) -> Self {
        match (horizontal, vertical) {
            (None, None) => SelectionAnchor::None,
            (Some(Horizontal::Left), None) => SelectionAnchor::Left,
            (Some(Horizontal::Right), None) => SelectionAnchor::Right,
            (None, Some(Vertical::Top)) => SelectionAnchor::Top,
            (None, Some(Vertical::Bottom)) => SelectionAnchor::Bottom,
            (Some(Horizontal::Left), Some(Vertical::Top)) => SelectionAnchor::TopLeft,
            (Some(Horizontal::Right), Some(Vertical::Top)) => SelectionAnchor::TopRight,
            (Some(Horizontal::Left), Some(Vertical::Bottom)) => SelectionAnchor::BottomLeft,
            (Some(Horizontal::Right), Some(Vertical::Bottom)) => SelectionAnchor::BottomRight,
        }
    }

    pub fn opposite(self) -> Self {
        Self::from_parts(
            self.horizontal().map(Horizontal::opposite),
            self.vertical().map(Vertical::opposite),
        )
    }

    /// The corner of `range` this anchor holds still; a missing component
    /// counts as top/left.
    pub fn fixed_cell(self, range: &CellRange) -> CellReference {
        CellReference::new(
            self.fixed_column(&range.column_range()),
            self.fixed_row(&range.row_range()),
        )
    }

    /// The corner of `range` an extend gesture moves.
    pub fn moving_cell(self, range: &CellRange) -> CellReference {
        CellReference::new(
            self.moving_column(&range.column_range()),
            self.moving_row(&range.row_range()),
        )
    }

    pub fn fixed_column(self, columns: &ColumnRange) -> ColumnReference {
        match self.horizontal() {
            Some(Horizontal::Right) => columns.end(),
            _ => columns.begin(),
        }
    }

    pub fn moving_column(self, columns: &ColumnRange) -> ColumnReference {
        match self.horizontal() {
            Some(Horizontal::Right) => columns.begin(),
            _ => columns.end(),
        }
    }

    pub fn fixed_row(self, rows: &RowRange) -> RowReference {
        match self.vertical() {
            Some(Vertical::Bottom) => rows.end(),
            _ => rows.begin(),
        }
    }

    pub fn moving_row(self, rows: &RowRange) -> RowReference {
        match self.vertical() {
            Some(Vertical::Bottom) => rows.begin(),
            _ => rows.end(),
        }
    }
}

impl Horizontal {
    pub fn opposite(self) -> Self {
        match self {
            Horizontal::Left => Horizontal::Right,
            Horizontal::Right => Horizontal::Left,
        }
    }
}

impl Vertical {
    pub fn opposite(self) -> Self {
        match self {
            Vertical::Top => Vertical::Bottom,
            Vertical::Bottom => Vertical::Top,
        }
    }
}

impl fmt::Display for SelectionAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionAnchor {
    type Err = ReferenceError;

    /// Accepts `top-left` as well as `TOP_LEFT`.
    fn from_str(text: &str) -> Result<Self> {
        let normalized = text.to_ascii_lowercase().replace('_', "-");
        SelectionAnchor::ALL
            .into_iter()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| {
                if text.is_empty() {
                    ReferenceError::Empty { what: "anchor" }
                } else {
                    ReferenceError::invalid_character(text, 0)
                }
            })
    }
}

// ============================================================================
// Anchored selection
// ============================================================================

/// A selection together with a compatible anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchoredSelection {
    selection: Selection,
    anchor: SelectionAnchor,
}

impl AnchoredSelection {
    /// Pair `selection` with `anchor`, failing when the anchor does not fit
    /// the selection kind.
    pub fn with(selection: Selection, anchor: SelectionAnchor) -> Result<Self> {
        check_anchor(&selection, anchor)?;
        Ok(Self { selection, anchor })
    }

    pub fn with_default_anchor(selection: Selection) -> Self {
        let anchor = selection.default_anchor();
        Self { selection, anchor }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn anchor(&self) -> SelectionAnchor {
        self.anchor
    }

    pub fn into_parts(self) -> (Selection, SelectionAnchor) {
        (self.selection, self.anchor)
    }

    pub fn set_anchor(self, anchor: SelectionAnchor) -> Result<Self> {
        if anchor == self.anchor {
            return Ok(self);
        }
        Self::with(self.selection, anchor)
    }

    /// Replace the selection, keeping the anchor.
    pub fn set_selection(self, selection: Selection) -> Result<Self> {
        if selection == self.selection {
            return Ok(self);
        }
        Self::with(selection, self.anchor)
    }
}

fn check_anchor(selection: &Selection, anchor: SelectionAnchor) -> Result<()> {
    let kind = selection.kind();
    if anchor.is_compatible(kind) {
        return Ok(());
    }
    let valid = SelectionAnchor::compatible(kind)
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ");
    Err(ReferenceError::IncompatibleAnchor {
        anchor: anchor.to_string(),
        selection: format!("{} {}", kind, selection),
        valid,
    })
}

impl fmt::Display for AnchoredSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.selection.kind(), self.selection)?;
        if self.anchor != SelectionAnchor::None {
            write!(f, " {}", self.anchor)?;
        }
        Ok(())
    }
}

impl FromStr for AnchoredSelection {
    type Err = ReferenceError;

    /// Parse the printed form, e.g. `cell-range A1:B2 top-left`.
    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let kind: SelectionKind = tokens
            .next()
            .ok_or(ReferenceError::Empty { what: "anchored selection" })?
            .parse()?;
        let selection = kind.parse(
            tokens
                .next()
                .ok_or(ReferenceError::Empty { what: "selection" })?,
        )?;
        let anchor = match tokens.next() {
            Some(token) => token.parse()?,
            None => SelectionAnchor::None,
        };
        if let Some(extra) = tokens.next() {
            let position = text.rfind(extra).unwrap_or(0);
            return Err(ReferenceError::invalid_character(text, position));
        }
        Self::with(selection, anchor)
    }
}

text_serde!(AnchoredSelection);
