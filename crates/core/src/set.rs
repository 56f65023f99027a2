//! Ordered sets of references, ranges and labels with a comma-separated text form.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ReferenceError;
use crate::label::LabelName;
use crate::range::{CellRange, ColumnRange, RowRange};
use crate::reference::{CellReference, ColumnReference, RowReference};

/// An immutable, ordered, duplicate-free set. Updates return a new set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionSet<T: Ord> {
    items: BTreeSet<T>,
}

pub type CellReferenceSet = SelectionSet<CellReference>;
pub type CellRangeSet = SelectionSet<CellRange>;
pub type ColumnReferenceSet = SelectionSet<ColumnReference>;
pub type ColumnRangeSet = SelectionSet<ColumnRange>;
pub type RowReferenceSet = SelectionSet<RowReference>;
pub type RowRangeSet = SelectionSet<RowRange>;
pub type LabelNameSet = SelectionSet<LabelName>;

impl<T: Ord> SelectionSet<T> {
    pub const EMPTY: Self = Self {
        items: BTreeSet::new(),
    };

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Ord + Clone> SelectionSet<T> {
    /// A copy of this set with `item` added.
    pub fn concat(&self, item: T) -> Self {
        if self.items.contains(&item) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.insert(item);
        Self { items }
    }

    /// A copy of this set without `item`.
    pub fn delete(&self, item: &T) -> Self {
        if !self.items.contains(item) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.remove(item);
        Self { items }
    }
}

impl<T: Ord + FromStr<Err = ReferenceError>> SelectionSet<T> {
    /// Parse comma-separated items, trimming whitespace around each. Empty or
    /// whitespace-only text is the empty set.
    pub fn parse(text: &str) -> Result<Self, ReferenceError> {
        if text.trim().is_empty() {
            return Ok(Self::EMPTY);
        }
        let mut items = BTreeSet::new();
        let mut offset = 0;
        for token in text.split(',') {
            let leading = token.len() - token.trim_start().len();
            let item = token
                .trim()
                .parse()
                .map_err(|e: ReferenceError| e.within(text, offset + leading))?;
            items.insert(item);
            offset += token.len() + 1;
        }
        Ok(Self { items })
    }
}

impl<T: Ord> Default for SelectionSet<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Ord> FromIterator<T> for SelectionSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> IntoIterator for SelectionSet<T> {
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for SelectionSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

impl<T: Ord + FromStr<Err = ReferenceError>> FromStr for SelectionSet<T> {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self, ReferenceError> {
        Self::parse(text)
    }
}

impl<T: Ord + fmt::Display> serde::Serialize for SelectionSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: Ord + FromStr<Err = ReferenceError>> serde::Deserialize<'de> for SelectionSet<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_orders() {
        let set = CellReferenceSet::parse(" B2 , A1,B2 ").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "A1,B2");
    }

    #[test]
    fn test_parse_empty_text() {
        assert_eq!(ColumnReferenceSet::parse("").unwrap(), ColumnReferenceSet::EMPTY);
        assert_eq!(ColumnReferenceSet::parse("   ").unwrap(), ColumnReferenceSet::EMPTY);
        assert_eq!(RowRangeSet::EMPTY.to_string(), "");
    }

    #[test]
    fn test_parse_error_position_is_absolute() {
        let err = CellReferenceSet::parse("A1, B!").unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::InvalidCharacter { character: '!', position: 5, .. }
        ));
    }

    #[test]
    fn test_concat_and_delete_leave_original_untouched() {
        let original = RowReferenceSet::parse("1,3").unwrap();
        let added = original.concat("2".parse().unwrap());
        assert_eq!(added.to_string(), "1,2,3");
        assert_eq!(original.to_string(), "1,3");

        let removed = added.delete(&"1".parse().unwrap());
        assert_eq!(removed.to_string(), "2,3");
        assert_eq!(removed.delete(&"9".parse().unwrap()), removed);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let set = LabelNameSet::parse("Revenue,REVENUE,Costs").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&"revenue".parse().unwrap()));
    }

    #[test]
    fn test_json_is_text() {
        let set = CellRangeSet::parse("A1:B2,C3").unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"A1:B2,C3\"");
        let back: CellRangeSet = serde_json::from_str("\"C3, A1:B2\"").unwrap();
        assert_eq!(back, set);
    }
}
