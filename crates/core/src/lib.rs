// Core types - references, ranges, selections, anchors

/// Serialize and deserialize a type through its `Display`/`FromStr` text form.
macro_rules! text_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod anchor;
pub mod entity;
pub mod error;
pub mod label;
pub mod path;
pub mod range;
pub mod reference;
pub mod selection;
pub mod set;

pub use anchor::{AnchoredSelection, Horizontal, SelectionAnchor, Vertical};
pub use entity::{GridColumn, GridRow};
pub use error::{ReferenceError, Result};
pub use label::LabelName;
pub use path::{CellRangePath, PathBuffer, PathCells};
pub use range::{CellRange, ColumnRange, ReferenceRange, RowRange};
pub use reference::{
    column_letters, is_cell_reference_text, CellReference, ColumnOrRowReference, ColumnReference,
    ReferenceKind, RowReference, MAX_COLUMN, MAX_ROW,
};
pub use selection::{ExpressionReference, Selection, SelectionKind};
pub use set::{
    CellRangeSet, CellReferenceSet, ColumnRangeSet, ColumnReferenceSet, LabelNameSet,
    RowRangeSet, RowReferenceSet, SelectionSet,
};
