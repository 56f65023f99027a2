//! Label definitions and management
//!
//! Labels give meaningful names to cells, ranges, columns or rows
//! (e.g. `Revenue` instead of `B2:B100`). A label may also alias another
//! label; resolution through [`LabelNameResolver`] follows exactly one hop.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use gridnav_core::{CellReference, LabelName, Selection};

use crate::error::LabelStoreError;

/// Hop limit used when chasing labels that alias other labels.
pub const DEFAULT_MAX_LABEL_HOPS: usize = 16;

/// A label that maps a name to a selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelMapping {
    /// The name (case-insensitive for lookups, but preserves original case)
    pub label: LabelName,

    /// What the name refers to
    pub target: Selection,

    /// Optional description for documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LabelMapping {
    pub fn new(label: LabelName, target: impl Into<Selection>) -> Self {
        Self {
            label,
            target: target.into(),
            description: None,
        }
    }

    /// Add a description to this label
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if this label's target covers the given cell. Labels that alias
    /// other labels never match directly.
    pub fn references_cell(&self, cell: &CellReference) -> bool {
        self.target.test_cell(cell).unwrap_or(false)
    }

    fn is_self_reference(&self) -> bool {
        matches!(&self.target, Selection::Label(target) if *target == self.label)
    }
}

/// One-hop label lookup.
pub trait LabelNameResolver {
    /// The direct target of `label`, or `None` when the label is unknown.
    fn resolve_label(&self, label: &LabelName) -> Option<Selection>;

    /// Resolve `selection` when it is a label; other selections come back
    /// unchanged.
    fn resolve_if_label(&self, selection: &Selection) -> Option<Selection> {
        match selection {
            Selection::Label(label) => self.resolve_label(label),
            other => Some(other.clone()),
        }
    }
}

/// Storage for labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStore {
    mappings: FxHashMap<LabelName, LabelMapping>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a label
    pub fn set(&mut self, mapping: LabelMapping) -> Result<(), LabelStoreError> {
        if mapping.is_self_reference() {
            return Err(LabelStoreError::SelfReference(mapping.label.to_string()));
        }
        self.mappings.insert(mapping.label.clone(), mapping);
        Ok(())
    }

    pub fn get(&self, label: &LabelName) -> Option<&LabelMapping> {
        self.mappings.get(label)
    }

    pub fn remove(&mut self, label: &LabelName) -> Option<LabelMapping> {
        self.mappings.remove(label)
    }

    /// Update the description of a label
    pub fn set_description(
        &mut self,
        label: &LabelName,
        description: Option<String>,
    ) -> Result<(), LabelStoreError> {
        match self.mappings.get_mut(label) {
            Some(mapping) => {
                mapping.description = description;
                Ok(())
            }
            None => Err(LabelStoreError::NotFound(label.to_string())),
        }
    }

    /// Rename a label (fails if the old name doesn't exist or the new name is taken)
    pub fn rename(&mut self, old: &LabelName, new: LabelName) -> Result<(), LabelStoreError> {
        if old != &new && self.mappings.contains_key(&new) {
            return Err(LabelStoreError::AlreadyExists(new.to_string()));
        }

        let Some(mapping) = self.mappings.get(old) else {
            return Err(LabelStoreError::NotFound(old.to_string()));
        };
        if matches!(&mapping.target, Selection::Label(target) if *target == new) {
            return Err(LabelStoreError::SelfReference(new.to_string()));
        }

        if let Some(mut mapping) = self.mappings.remove(old) {
            mapping.label = new.clone();
            self.mappings.insert(new, mapping);
        }
        Ok(())
    }

    pub fn contains(&self, label: &LabelName) -> bool {
        self.mappings.contains_key(label)
    }

    /// All labels, ordered by name
    pub fn list(&self) -> Vec<&LabelMapping> {
        let mut mappings: Vec<&LabelMapping> = self.mappings.values().collect();
        mappings.sort_by(|a, b| a.label.cmp(&b.label));
        mappings
    }

    /// Find all labels whose target covers a specific cell, ordered by name
    pub fn find_by_cell(&self, cell: &CellReference) -> Vec<&LabelMapping> {
        let mut mappings: Vec<&LabelMapping> = self
            .mappings
            .values()
            .filter(|m| m.references_cell(cell))
            .collect();
        mappings.sort_by(|a, b| a.label.cmp(&b.label));
        mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl LabelNameResolver for LabelStore {
    fn resolve_label(&self, label: &LabelName) -> Option<Selection> {
        self.get(label).map(|m| m.target.clone())
    }
}
