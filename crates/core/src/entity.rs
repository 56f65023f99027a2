//! Column and row entities: a reference plus the per-line state the
//! navigation engine cares about.

use serde::{Deserialize, Serialize};

use crate::reference::{ColumnReference, RowReference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridColumn {
    pub reference: ColumnReference,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRow {
    pub reference: RowReference,
    #[serde(default)]
    pub hidden: bool,
}

impl GridColumn {
    pub fn new(reference: ColumnReference, hidden: bool) -> Self {
        Self { reference, hidden }
    }
}

impl GridRow {
    pub fn new(reference: RowReference, hidden: bool) -> Self {
        Self { reference, hidden }
    }
}
