//! Loading cell data for references and labels through a pluggable loader.
//!
//! Value storage lives outside this crate; a [`ReferenceLoader`] is the narrow
//! interface the rest of the engine sees.

use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use gridnav_core::{CellRange, CellRangePath, CellReference, LabelName, Selection};

use crate::error::LoaderError;
use crate::label::{LabelMapping, LabelNameResolver, LabelStore, DEFAULT_MAX_LABEL_HOPS};

pub trait ReferenceLoader {
    /// Whatever the host stores per cell.
    type Cell;

    fn load_cell(&self, cell: &CellReference) -> Option<Self::Cell>;

    /// Cells present in `range`, in LRTD order. Absent cells are omitted.
    fn load_cell_range(&self, range: &CellRange) -> Vec<(CellReference, Self::Cell)>;

    /// The mapping behind `label`; `Ok(None)` when the label is unknown.
    fn load_label(&self, label: &LabelName) -> Result<Option<LabelMapping>, LoaderError>;

    /// Load every present cell a selection covers. Labels are followed
    /// through [`ReferenceLoader::load_label`]; an unknown label loads nothing.
    fn load_selection(
        &self,
        selection: &Selection,
    ) -> Result<Vec<(CellReference, Self::Cell)>, LoaderError> {
        let mut current = selection.clone();
        for _ in 0..DEFAULT_MAX_LABEL_HOPS {
            match current {
                Selection::Label(label) => match self.load_label(&label)? {
                    Some(mapping) => current = mapping.target,
                    None => return Ok(Vec::new()),
                },
                other => {
                    let range = other
                        .to_cell_range()
                        .map_err(|_| LoaderError::Unsupported { operation: "load_selection" })?;
                    return Ok(self.load_cell_range(&range));
                }
            }
        }
        log::warn!("Label chain from {} exceeds {} hops", selection, DEFAULT_MAX_LABEL_HOPS);
        Ok(Vec::new())
    }
}

/// Loads nothing and declines label lookups.
#[derive(Debug)]
pub struct EmptyReferenceLoader<C> {
    cell: PhantomData<fn() -> C>,
}

impl<C> EmptyReferenceLoader<C> {
    pub fn new() -> Self {
        Self { cell: PhantomData }
    }
}

impl<C> Default for EmptyReferenceLoader<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for EmptyReferenceLoader<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C> ReferenceLoader for EmptyReferenceLoader<C> {
    type Cell = C;

    fn load_cell(&self, _cell: &CellReference) -> Option<C> {
        None
    }

    fn load_cell_range(&self, _range: &CellRange) -> Vec<(CellReference, C)> {
        Vec::new()
    }

    fn load_label(&self, _label: &LabelName) -> Result<Option<LabelMapping>, LoaderError> {
        Err(LoaderError::Unsupported { operation: "load_label" })
    }
}

/// An in-memory loader: sparse cells keyed by position plus a label store.
/// Loaded cells always come back as relative references, whatever `$`
/// markers the request carried.
#[derive(Debug, Clone)]
pub struct LabelStoreReferenceLoader<C> {
    cells: FxHashMap<CellReference, C>,
    labels: LabelStore,
}

impl<C> Default for LabelStoreReferenceLoader<C> {
    fn default() -> Self {
        Self {
            cells: FxHashMap::default(),
            labels: LabelStore::new(),
        }
    }
}

impl<C> LabelStoreReferenceLoader<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(labels: LabelStore) -> Self {
        Self {
            cells: FxHashMap::default(),
            labels,
        }
    }

    /// Store `value` at `cell`; `$` markers are ignored.
    pub fn insert_cell(&mut self, cell: CellReference, value: C) -> Option<C> {
        self.cells.insert(cell.to_relative(), value)
    }

    pub fn remove_cell(&mut self, cell: &CellReference) -> Option<C> {
        self.cells.remove(&cell.to_relative())
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut LabelStore {
        &mut self.labels
    }
}

impl<C: Clone> ReferenceLoader for LabelStoreReferenceLoader<C> {
    type Cell = C;

    fn load_cell(&self, cell: &CellReference) -> Option<C> {
        self.cells.get(&cell.to_relative()).cloned()
    }

    fn load_cell_range(&self, range: &CellRange) -> Vec<(CellReference, C)> {
        let path = CellRangePath::Lrtd;

        // Small ranges: walk the range. Large ranges: scan the stored cells.
        if range.count() <= self.cells.len() as u64 {
            return path
                .cells(*range)
                .filter_map(|cell| {
                    let cell = cell.to_relative();
                    self.load_cell(&cell).map(|value| (cell, value))
                })
                .collect();
        }

        let mut loaded: Vec<(CellReference, C)> = self
            .cells
            .iter()
            .filter(|(cell, _)| range.contains(**cell))
            .map(|(cell, value)| (*cell, value.clone()))
            .collect();
        loaded.sort_by(|(a, _), (b, _)| path.compare(a, b));
        loaded
    }

    fn load_label(&self, label: &LabelName) -> Result<Option<LabelMapping>, LoaderError> {
        Ok(self.labels.get(label).cloned())
    }
}

impl<C> LabelNameResolver for LabelStoreReferenceLoader<C> {
    fn resolve_label(&self, label: &LabelName) -> Option<Selection> {
        self.labels.resolve_label(label)
    }
}
